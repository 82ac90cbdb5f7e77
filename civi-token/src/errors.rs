pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_INVALID_ADDRESS: &str = "Invalid address";
pub const ERR_ZERO_AMOUNT: &str = "Amount must be positive";
pub const ERR_INSUFFICIENT_BALANCE: &str = "Insufficient balance";
pub const ERR_INSUFFICIENT_ALLOWANCE: &str = "Insufficient allowance";
