#![no_std]

multiversx_sc::imports!();

pub mod civi_token_proxy;
pub mod errors;
pub mod issue_manager_proxy;
pub mod types;

use errors::{
    ERR_ALREADY_VOTED, ERR_CANNOT_VOTE_OWN_ISSUE, ERR_DESCRIPTION_TOO_LONG, ERR_EMPTY_DESCRIPTION,
    ERR_EMPTY_TITLE, ERR_INVALID_ADDRESS, ERR_ISSUE_NOT_FOUND, ERR_TITLE_TOO_LONG,
    ERR_UNAUTHORIZED, ERR_ZERO_AMOUNT,
};
use types::{Issue, UserVote};

// ============================================================
// Constants
// ============================================================

/// Maximum title length in bytes
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum description length in bytes
pub const MAX_DESCRIPTION_LEN: usize = 2_000;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait IssueManager {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `civi_token_address` must hand its owner role to this contract
    /// (`transferOwnership`) before the first issue can be created.
    #[init]
    fn init(
        &self,
        civi_token_address: ManagedAddress,
        create_issue_reward: BigUint,
        vote_reward: BigUint,
    ) {
        require!(!civi_token_address.is_zero(), ERR_INVALID_ADDRESS);
        require!(
            create_issue_reward > 0u64 && vote_reward > 0u64,
            ERR_ZERO_AMOUNT
        );

        self.civi_token().set(&civi_token_address);
        self.create_issue_reward().set(&create_issue_reward);
        self.vote_reward().set(&vote_reward);
        self.issue_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createIssue
    // Records the issue, then reimburses the author in CIVI.
    // ========================================================

    #[endpoint(createIssue)]
    fn create_issue(&self, title: ManagedBuffer, description: ManagedBuffer) -> u64 {
        require!(title.len() <= MAX_TITLE_LEN, ERR_TITLE_TOO_LONG);
        require!(
            !is_blank::<Self::Api, MAX_TITLE_LEN>(&title),
            ERR_EMPTY_TITLE
        );
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            ERR_DESCRIPTION_TOO_LONG
        );
        require!(
            !is_blank::<Self::Api, MAX_DESCRIPTION_LEN>(&description),
            ERR_EMPTY_DESCRIPTION
        );

        let caller = self.blockchain().get_caller();
        let issue_id = self.issue_count().get() + 1u64;
        let timestamp = self.blockchain().get_block_timestamp();

        let issue = Issue {
            id: issue_id,
            author: caller.clone(),
            title,
            description,
            upvotes: 0u64,
            downvotes: 0u64,
            created_at: timestamp,
        };

        self.issues(issue_id).set(&issue);
        self.issue_count().set(issue_id);
        self.user_issues(&caller).push(&issue_id);

        self.issue_created_event(issue_id, &caller, &issue.title, timestamp);

        self.reimburse(&caller, self.create_issue_reward().get());

        issue_id
    }

    // ========================================================
    // ENDPOINT: voteOnIssue
    // One vote per user per issue, never on your own issue.
    // ========================================================

    #[endpoint(voteOnIssue)]
    fn vote_on_issue(&self, issue_id: u64, is_upvote: bool) {
        let caller = self.blockchain().get_caller();
        self.require_issue_exists(issue_id);
        require!(
            self.user_votes(issue_id, &caller).is_empty(),
            ERR_ALREADY_VOTED
        );

        let mut issue = self.issues(issue_id).get();
        require!(issue.author != caller, ERR_CANNOT_VOTE_OWN_ISSUE);

        if is_upvote {
            issue.upvotes += 1;
        } else {
            issue.downvotes += 1;
        }

        self.issues(issue_id).set(&issue);
        self.user_votes(issue_id, &caller).set(UserVote {
            has_voted: true,
            direction: is_upvote,
        });

        self.vote_cast_event(issue_id, &caller, is_upvote);

        self.reimburse(&caller, self.vote_reward().get());
    }

    #[endpoint(upvoteIssue)]
    fn upvote_issue(&self, issue_id: u64) {
        self.vote_on_issue(issue_id, true);
    }

    #[endpoint(downvoteIssue)]
    fn downvote_issue(&self, issue_id: u64) {
        self.vote_on_issue(issue_id, false);
    }

    // ========================================================
    // ADMIN — contract owner only
    // ========================================================

    #[endpoint(updateCiviToken)]
    fn update_civi_token(&self, new_token_address: ManagedAddress) {
        self.require_owner();
        require!(!new_token_address.is_zero(), ERR_INVALID_ADDRESS);

        let old_token_address = self.civi_token().get();
        self.civi_token().set(&new_token_address);

        self.civi_token_updated_event(&old_token_address, &new_token_address);
    }

    #[endpoint(setReimbursementAmounts)]
    fn set_reimbursement_amounts(&self, create_issue_reward: BigUint, vote_reward: BigUint) {
        self.require_owner();
        require!(
            create_issue_reward > 0u64 && vote_reward > 0u64,
            ERR_ZERO_AMOUNT
        );

        self.create_issue_reward().set(&create_issue_reward);
        self.vote_reward().set(&vote_reward);

        self.reimbursement_updated_event(&create_issue_reward, &vote_reward);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address(),
            ERR_UNAUTHORIZED
        );
    }

    fn require_issue_exists(&self, issue_id: u64) {
        require!(
            issue_id >= 1 && issue_id <= self.issue_count().get(),
            ERR_ISSUE_NOT_FOUND
        );
    }

    /// Mints `amount` CIVI to `user` and books it in the gas ledger.
    /// A failing mint (e.g. this contract no longer owns the token)
    /// reverts the whole transaction.
    fn reimburse(&self, user: &ManagedAddress, amount: BigUint) {
        let token_address = self.civi_token().get();
        self.tx()
            .to(&token_address)
            .typed(civi_token_proxy::CiviTokenProxy)
            .mint(user, &amount)
            .sync_call();

        self.user_gas_spent(user).update(|spent| *spent += &amount);
        self.gas_reimbursed_event(user, &amount);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getIssue)]
    fn get_issue(&self, issue_id: u64) -> Issue<Self::Api> {
        self.require_issue_exists(issue_id);
        self.issues(issue_id).get()
    }

    #[view(getIssueCount)]
    fn get_issue_count(&self) -> u64 {
        self.issue_count().get()
    }

    #[view(getTotalIssues)]
    fn get_total_issues(&self) -> u64 {
        self.issue_count().get()
    }

    #[view(getIssues)]
    fn get_issues(&self, from: u64, count: u64) -> MultiValueEncoded<Issue<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.issue_count().get();
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for id in start..=end {
            result.push(self.issues(id).get());
        }
        result
    }

    #[view(getUserIssues)]
    fn get_user_issues(&self, user: &ManagedAddress) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for issue_id in self.user_issues(user).iter() {
            result.push(issue_id);
        }
        result
    }

    /// Pairs that never voted get `UserVote::default()`.
    #[view(getUserVote)]
    fn get_user_vote(&self, issue_id: u64, user: &ManagedAddress) -> UserVote {
        if self.user_votes(issue_id, user).is_empty() {
            return UserVote::default();
        }
        self.user_votes(issue_id, user).get()
    }

    #[view(hasUserVoted)]
    fn has_user_voted(&self, issue_id: u64, user: &ManagedAddress) -> bool {
        self.get_user_vote(issue_id, user).has_voted
    }

    #[view(getUserGasSpent)]
    fn get_user_gas_spent(&self, user: &ManagedAddress) -> BigUint {
        self.user_gas_spent(user).get()
    }

    #[view(getCiviToken)]
    fn get_civi_token(&self) -> ManagedAddress {
        self.civi_token().get()
    }

    #[view(getReimbursementAmounts)]
    fn get_reimbursement_amounts(&self) -> MultiValue2<BigUint, BigUint> {
        (self.create_issue_reward().get(), self.vote_reward().get()).into()
    }

    #[view(getTokenBalance)]
    fn get_token_balance(&self, user: ManagedAddress) -> BigUint {
        let token_address = self.civi_token().get();
        self.tx()
            .to(&token_address)
            .typed(civi_token_proxy::CiviTokenProxy)
            .balance_of(user)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("issueCreated")]
    fn issue_created_event(
        &self,
        #[indexed] issue_id: u64,
        #[indexed] author: &ManagedAddress,
        #[indexed] title: &ManagedBuffer,
        created_at: u64,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] issue_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] is_upvote: bool,
    );

    #[event("gasReimbursed")]
    fn gas_reimbursed_event(&self, #[indexed] user: &ManagedAddress, amount: &BigUint);

    #[event("civiTokenUpdated")]
    fn civi_token_updated_event(
        &self,
        #[indexed] old_token_address: &ManagedAddress,
        #[indexed] new_token_address: &ManagedAddress,
    );

    #[event("reimbursementUpdated")]
    fn reimbursement_updated_event(
        &self,
        #[indexed] create_issue_reward: &BigUint,
        vote_reward: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("civiToken")]
    fn civi_token(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("createIssueReward")]
    fn create_issue_reward(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("voteReward")]
    fn vote_reward(&self) -> SingleValueMapper<BigUint>;

    // ── Issues ──

    #[storage_mapper("issueCount")]
    fn issue_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("issues")]
    fn issues(&self, id: u64) -> SingleValueMapper<Issue<Self::Api>>;

    #[storage_mapper("userIssues")]
    fn user_issues(&self, user: &ManagedAddress) -> VecMapper<u64>;

    // ── Votes & reimbursement ──

    #[storage_mapper("userVotes")]
    fn user_votes(&self, issue_id: u64, voter: &ManagedAddress) -> SingleValueMapper<UserVote>;

    #[storage_mapper("userGasSpent")]
    fn user_gas_spent(&self, user: &ManagedAddress) -> SingleValueMapper<BigUint>;
}

/// True when `text` is empty or holds only ASCII whitespace.
/// Unicode spaces such as U+00A0 or U+3000 are not blank: the bytes are
/// never decoded as UTF-8.
/// `text` must not be longer than `N` bytes.
fn is_blank<M: ManagedTypeApi, const N: usize>(text: &ManagedBuffer<M>) -> bool {
    let mut scratch = [0u8; N];
    text.load_to_byte_array(&mut scratch)
        .iter()
        .all(u8::is_ascii_whitespace)
}
