pub const ERR_EMPTY_TITLE: &str = "Title cannot be empty";
pub const ERR_TITLE_TOO_LONG: &str = "Title too long";
pub const ERR_EMPTY_DESCRIPTION: &str = "Description cannot be empty";
pub const ERR_DESCRIPTION_TOO_LONG: &str = "Description too long";
pub const ERR_ISSUE_NOT_FOUND: &str = "Issue does not exist";
pub const ERR_ALREADY_VOTED: &str = "Already voted on this issue";
pub const ERR_CANNOT_VOTE_OWN_ISSUE: &str = "Cannot vote on your own issue";
pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_INVALID_ADDRESS: &str = "Invalid address";
pub const ERR_ZERO_AMOUNT: &str = "Amount must be positive";
