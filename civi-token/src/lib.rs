#![no_std]

multiversx_sc::imports!();

pub mod civi_token_proxy;
pub mod errors;

use errors::{
    ERR_INSUFFICIENT_ALLOWANCE, ERR_INSUFFICIENT_BALANCE, ERR_INVALID_ADDRESS, ERR_UNAUTHORIZED,
    ERR_ZERO_AMOUNT,
};

// ============================================================
// Constants
// ============================================================

/// Display precision, same as EGLD
const DECIMALS: u32 = 18;

// ============================================================
// Contract
// ============================================================

/// CIVI — fungible reward unit for civic participation.
///
/// A plain storage ledger (not an ESDT) with a single privileged owner.
/// The owner is the only account allowed to mint; after deployment the
/// owner role is handed to the IssueManager so it can reimburse callers.
#[multiversx_sc::contract]
pub trait CiviToken {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        name: ManagedBuffer,
        symbol: ManagedBuffer,
        initial_supply: BigUint,
        gas_reimbursement_rate: BigUint,
    ) {
        let caller = self.blockchain().get_caller();

        self.token_name().set(&name);
        self.token_symbol().set(&symbol);
        self.gas_reimbursement_rate().set(&gas_reimbursement_rate);
        self.token_owner().set(&caller);
        self.total_supply().set(BigUint::zero());

        if initial_supply > 0u64 {
            self.mint_unchecked(&caller, &initial_supply);
        }

        self.ownership_transferred_event(&ManagedAddress::zero(), &caller);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // OWNER: mint / ownership / config
    // ========================================================

    #[endpoint(mint)]
    fn mint(&self, to: ManagedAddress, amount: BigUint) {
        self.require_owner();
        require!(!to.is_zero(), ERR_INVALID_ADDRESS);
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        self.mint_unchecked(&to, &amount);
    }

    #[endpoint(transferOwnership)]
    fn transfer_ownership(&self, new_owner: ManagedAddress) {
        self.require_owner();
        require!(!new_owner.is_zero(), ERR_INVALID_ADDRESS);

        let previous = self.token_owner().get();
        self.token_owner().set(&new_owner);
        self.ownership_transferred_event(&previous, &new_owner);
    }

    /// Leaves the token without an owner. Minting is disabled for good.
    #[endpoint(renounceOwnership)]
    fn renounce_ownership(&self) {
        self.require_owner();

        let previous = self.token_owner().get();
        self.token_owner().set(ManagedAddress::zero());
        self.ownership_transferred_event(&previous, &ManagedAddress::zero());
    }

    #[endpoint(setGasReimbursementRate)]
    fn set_gas_reimbursement_rate(&self, rate: BigUint) {
        self.require_owner();
        self.gas_reimbursement_rate().set(&rate);
    }

    // ========================================================
    // ENDPOINTS: fungible token surface
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.move_balance(&caller, &to, &amount);
    }

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        require!(!spender.is_zero(), ERR_INVALID_ADDRESS);

        let caller = self.blockchain().get_caller();
        self.allowances(&caller, &spender).set(&amount);
        self.approval_event(&caller, &spender, &amount);
    }

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        let spender = self.blockchain().get_caller();
        let allowance = self.allowances(&from, &spender).get();
        require!(allowance >= amount, ERR_INSUFFICIENT_ALLOWANCE);

        self.allowances(&from, &spender).set(&allowance - &amount);
        self.move_balance(&from, &to, &amount);
    }

    #[endpoint(burn)]
    fn burn(&self, amount: BigUint) {
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        let caller = self.blockchain().get_caller();
        let balance = self.balances(&caller).get();
        require!(balance >= amount, ERR_INSUFFICIENT_BALANCE);

        self.balances(&caller).set(&balance - &amount);
        self.total_supply().update(|supply| *supply -= &amount);

        self.burn_event(&caller, &amount);
        self.transfer_event(&caller, &ManagedAddress::zero(), &amount);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.token_owner().get(), ERR_UNAUTHORIZED);
    }

    fn mint_unchecked(&self, to: &ManagedAddress, amount: &BigUint) {
        self.balances(to).update(|balance| *balance += amount);
        self.total_supply().update(|supply| *supply += amount);

        self.mint_event(to, amount);
        self.transfer_event(&ManagedAddress::zero(), to, amount);
    }

    /// Supply is conserved: whatever leaves `from` lands on `to`.
    fn move_balance(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        require!(!to.is_zero(), ERR_INVALID_ADDRESS);

        let from_balance = self.balances(from).get();
        require!(from_balance >= *amount, ERR_INSUFFICIENT_BALANCE);

        self.balances(from).set(&from_balance - amount);
        self.balances(to).update(|balance| *balance += amount);

        self.transfer_event(from, to, amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(name)]
    fn name(&self) -> ManagedBuffer {
        self.token_name().get()
    }

    #[view(symbol)]
    fn symbol(&self) -> ManagedBuffer {
        self.token_symbol().get()
    }

    #[view(decimals)]
    fn decimals(&self) -> u32 {
        DECIMALS
    }

    #[view(totalSupply)]
    fn get_total_supply(&self) -> BigUint {
        self.total_supply().get()
    }

    #[view(balanceOf)]
    fn balance_of(&self, account: &ManagedAddress) -> BigUint {
        self.balances(account).get()
    }

    #[view(allowance)]
    fn allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress) -> BigUint {
        self.allowances(owner, spender).get()
    }

    #[view(owner)]
    fn owner(&self) -> ManagedAddress {
        self.token_owner().get()
    }

    #[view(getGasReimbursementRate)]
    fn get_gas_reimbursement_rate(&self) -> BigUint {
        self.gas_reimbursement_rate().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("approval")]
    fn approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("mint")]
    fn mint_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    #[event("burn")]
    fn burn_event(&self, #[indexed] from: &ManagedAddress, amount: &BigUint);

    #[event("ownershipTransferred")]
    fn ownership_transferred_event(
        &self,
        #[indexed] previous_owner: &ManagedAddress,
        #[indexed] new_owner: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Metadata ──

    #[storage_mapper("name")]
    fn token_name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("symbol")]
    fn token_symbol(&self) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("gasReimbursementRate")]
    fn gas_reimbursement_rate(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("owner")]
    fn token_owner(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Ledger ──

    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("balances")]
    fn balances(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("allowances")]
    fn allowances(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
