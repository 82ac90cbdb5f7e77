fn main() {
    multiversx_sc_meta_lib::cli_main::<issue_manager::AbiProvider>();
}
