//! The ledger state machine.
//!
//! Every mutating operation validates first and commits last: all new values
//! are computed with checked arithmetic before the first map write, so a
//! rejected operation leaves the ledger untouched.

use crate::{
    error::{AccountRole, LedgerError, LedgerResult},
    event::LedgerEvent,
};
use alloy_primitives::{Address, U256};
use config::{AllowancePolicy, TokenConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Balances, allowances and total supply of a single token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    name: String,
    symbol: String,
    decimals: u8,
    total_supply: U256,
    allowance_policy: AllowancePolicy,
    balances: BTreeMap<Address, U256>,
    /// owner -> spender -> limit
    allowances: BTreeMap<Address, BTreeMap<Address, U256>>,
    events: Vec<LedgerEvent>,
}

/// Validated balance update, ready to commit.
struct BalanceMove {
    from: Address,
    to: Address,
    from_balance: U256,
    to_balance: U256,
}

/// Scale whole units by `10^decimals`.
///
/// Returns `None` when the result does not fit in 256 bits.
pub fn scale_units(units: u64, decimals: u8) -> Option<U256> {
    U256::from(10u8)
        .checked_pow(U256::from(decimals))
        .and_then(|factor| factor.checked_mul(U256::from(units)))
}

impl Ledger {
    /// Create the ledger, crediting the full scaled supply to `deployer`.
    pub fn genesis(config: &TokenConfig, deployer: Address) -> LedgerResult<Self> {
        ensure_account(deployer, AccountRole::Deployer)?;
        let supply = scale_units(config.initial_supply, config.decimals)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        let mut ledger = Self {
            name: config.name.clone(),
            symbol: config.symbol.clone(),
            decimals: config.decimals,
            total_supply: supply,
            allowance_policy: config.allowance_policy,
            balances: BTreeMap::from([(deployer, supply)]),
            allowances: BTreeMap::new(),
            events: Vec::new(),
        };
        ledger.emit(LedgerEvent::transfer(Address::ZERO, deployer, supply));

        info!(
            name = %ledger.name,
            symbol = %ledger.symbol,
            decimals = ledger.decimals,
            total_supply = %supply,
            deployer = %deployer,
            "Ledger genesis"
        );

        Ok(ledger)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    pub const fn total_supply(&self) -> U256 {
        self.total_supply
    }

    pub const fn allowance_policy(&self) -> AllowancePolicy {
        self.allowance_policy
    }

    /// Balance of `account`, zero if it never held tokens.
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    /// Amount `spender` may still move on behalf of `owner`.
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances
            .get(&owner)
            .and_then(|spenders| spenders.get(&spender))
            .copied()
            .unwrap_or_default()
    }

    /// Accounts with a recorded balance entry and their balances.
    pub fn balances(&self) -> impl Iterator<Item = (Address, U256)> + '_ {
        self.balances.iter().map(|(account, balance)| (*account, *balance))
    }

    /// Every event emitted so far, genesis first.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Events emitted after the first `cursor` events.
    pub fn events_since(&self, cursor: usize) -> &[LedgerEvent] {
        self.events.get(cursor..).unwrap_or_default()
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// The null account is a valid destination but never a source.
    pub fn transfer(
        &mut self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> LedgerResult<LedgerEvent> {
        ensure_account(from, AccountRole::Sender)?;
        let update = self.plan_move(from, to, amount)?;

        debug!(from = %from, to = %to, amount = %amount, "Transfer");
        self.commit_move(update);
        Ok(self.emit(LedgerEvent::transfer(from, to, amount)))
    }

    /// Set the allowance of `spender` over `owner`'s tokens to `amount`.
    ///
    /// This overwrites the previous value. Two approvals racing each other can
    /// let a spender use both the old and the new limit; callers adjusting an
    /// existing allowance should prefer [`Self::increase_allowance`] and
    /// [`Self::decrease_allowance`].
    pub fn approve(
        &mut self,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> LedgerResult<LedgerEvent> {
        ensure_account(owner, AccountRole::Owner)?;
        ensure_account(spender, AccountRole::Spender)?;

        debug!(owner = %owner, spender = %spender, amount = %amount, "Approve");
        Ok(self.set_allowance(owner, spender, amount))
    }

    /// Move `amount` from `owner` to `to`, spending `caller`'s allowance.
    ///
    /// The allowance is checked before the balance. Under
    /// [`AllowancePolicy::UnlimitedAtMax`] an allowance of `U256::MAX` is left
    /// untouched.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        owner: Address,
        to: Address,
        amount: U256,
    ) -> LedgerResult<LedgerEvent> {
        ensure_account(caller, AccountRole::Spender)?;
        ensure_account(owner, AccountRole::Owner)?;

        let allowance = self.allowance(owner, caller);
        if allowance < amount {
            return Err(LedgerError::InsufficientAllowance {
                owner,
                spender: caller,
                allowance,
                needed: amount,
            });
        }
        let update = self.plan_move(owner, to, amount)?;

        let unlimited = self.allowance_policy == AllowancePolicy::UnlimitedAtMax
            && allowance == U256::MAX;

        debug!(
            caller = %caller,
            owner = %owner,
            to = %to,
            amount = %amount,
            unlimited,
            "TransferFrom"
        );
        if !unlimited {
            self.allowances
                .entry(owner)
                .or_default()
                .insert(caller, allowance - amount);
        }
        self.commit_move(update);
        Ok(self.emit(LedgerEvent::transfer(owner, to, amount)))
    }

    /// Raise the allowance of `spender` by `added`.
    pub fn increase_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        added: U256,
    ) -> LedgerResult<LedgerEvent> {
        ensure_account(owner, AccountRole::Owner)?;
        ensure_account(spender, AccountRole::Spender)?;

        let allowance = self
            .allowance(owner, spender)
            .checked_add(added)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        debug!(owner = %owner, spender = %spender, added = %added, "IncreaseAllowance");
        Ok(self.set_allowance(owner, spender, allowance))
    }

    /// Lower the allowance of `spender` by `subtracted`.
    pub fn decrease_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        subtracted: U256,
    ) -> LedgerResult<LedgerEvent> {
        ensure_account(owner, AccountRole::Owner)?;
        ensure_account(spender, AccountRole::Spender)?;

        let current = self.allowance(owner, spender);
        let allowance = current
            .checked_sub(subtracted)
            .ok_or(LedgerError::AllowanceUnderflow {
                allowance: current,
                subtracted,
            })?;

        debug!(owner = %owner, spender = %spender, subtracted = %subtracted, "DecreaseAllowance");
        Ok(self.set_allowance(owner, spender, allowance))
    }

    /// Destroy `amount` of `holder`'s tokens, reducing the total supply.
    pub fn burn(&mut self, holder: Address, amount: U256) -> LedgerResult<LedgerEvent> {
        ensure_account(holder, AccountRole::Holder)?;

        let balance = self.balance_of(holder);
        if balance < amount {
            return Err(LedgerError::InsufficientBalance {
                account: holder,
                balance,
                needed: amount,
            });
        }
        let total_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        debug!(holder = %holder, amount = %amount, "Burn");
        self.balances.insert(holder, balance - amount);
        self.total_supply = total_supply;
        Ok(self.emit(LedgerEvent::transfer(holder, Address::ZERO, amount)))
    }

    /// Check that the balances add up to the total supply.
    pub fn audit(&self) -> LedgerResult<()> {
        let sum = self
            .balances
            .values()
            .try_fold(U256::ZERO, |acc, balance| acc.checked_add(*balance));

        match sum {
            Some(sum) if sum == self.total_supply => Ok(()),
            sum => Err(LedgerError::ConservationViolated {
                total_supply: self.total_supply,
                sum: sum.unwrap_or(U256::MAX),
            }),
        }
    }

    fn plan_move(&self, from: Address, to: Address, amount: U256) -> LedgerResult<BalanceMove> {
        let balance = self.balance_of(from);
        if balance < amount {
            return Err(LedgerError::InsufficientBalance {
                account: from,
                balance,
                needed: amount,
            });
        }

        let to_balance = if from == to {
            balance
        } else {
            self.balance_of(to)
                .checked_add(amount)
                .ok_or(LedgerError::ArithmeticOverflow)?
        };

        Ok(BalanceMove {
            from,
            to,
            from_balance: balance - amount,
            to_balance,
        })
    }

    fn commit_move(&mut self, update: BalanceMove) {
        self.balances.insert(update.from, update.from_balance);
        // Written second so a self-transfer ends on the unchanged balance.
        self.balances.insert(update.to, update.to_balance);
    }

    fn set_allowance(&mut self, owner: Address, spender: Address, amount: U256) -> LedgerEvent {
        self.allowances
            .entry(owner)
            .or_default()
            .insert(spender, amount);
        self.emit(LedgerEvent::approval(owner, spender, amount))
    }

    fn emit(&mut self, event: LedgerEvent) -> LedgerEvent {
        self.events.push(event);
        event
    }
}

fn ensure_account(account: Address, role: AccountRole) -> LedgerResult<()> {
    if account == Address::ZERO {
        return Err(LedgerError::InvalidAccount { role, account });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEPLOYER: Address = Address::repeat_byte(0x01);
    const ALICE: Address = Address::repeat_byte(0x0a);
    const BOB: Address = Address::repeat_byte(0x0b);

    fn units(amount: u64) -> U256 {
        scale_units(amount, 18).unwrap()
    }

    fn ledger() -> Ledger {
        Ledger::genesis(&TokenConfig::default(), DEPLOYER).unwrap()
    }

    #[test]
    fn test_genesis() {
        let ledger = ledger();
        assert_eq!(ledger.name(), "FORE Protocol");
        assert_eq!(ledger.symbol(), "FORE");
        assert_eq!(ledger.decimals(), 18);
        assert_eq!(ledger.total_supply(), units(1_000_000_000));
        assert_eq!(ledger.balance_of(DEPLOYER), ledger.total_supply());
        assert_eq!(
            ledger.events(),
            &[LedgerEvent::transfer(Address::ZERO, DEPLOYER, units(1_000_000_000))]
        );
        ledger.audit().unwrap();
    }

    #[test]
    fn test_genesis_rejects_null_deployer() {
        let err = Ledger::genesis(&TokenConfig::default(), Address::ZERO).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::InvalidAccount {
                role: AccountRole::Deployer,
                ..
            }
        ));
    }

    #[test]
    fn test_genesis_rejects_unrepresentable_supply() {
        let config = TokenConfig {
            decimals: 78,
            ..TokenConfig::default()
        };
        assert_eq!(
            Ledger::genesis(&config, DEPLOYER).unwrap_err(),
            LedgerError::ArithmeticOverflow
        );
    }

    #[test]
    fn test_scale_units() {
        assert_eq!(scale_units(1, 0), Some(U256::from(1)));
        assert_eq!(scale_units(1000, 3), Some(U256::from(1_000_000)));
        assert!(scale_units(1, 77).is_some());
        assert_eq!(scale_units(1, 78), None);
    }

    #[test]
    fn test_transfer_conserves_supply() {
        let mut ledger = ledger();
        let event = ledger.transfer(DEPLOYER, ALICE, units(1000)).unwrap();

        assert_eq!(event, LedgerEvent::transfer(DEPLOYER, ALICE, units(1000)));
        assert_eq!(ledger.balance_of(ALICE), units(1000));
        assert_eq!(ledger.balance_of(DEPLOYER), units(999_999_000));
        assert_eq!(ledger.total_supply(), units(1_000_000_000));
        ledger.audit().unwrap();
    }

    #[test]
    fn test_transfer_insufficient_balance_leaves_state() {
        let mut ledger = ledger();
        ledger.transfer(DEPLOYER, ALICE, U256::from(10)).unwrap();
        let before = ledger.clone();

        let err = ledger.transfer(ALICE, BOB, U256::from(11)).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientBalance {
                account: ALICE,
                balance: U256::from(10),
                needed: U256::from(11),
            }
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_zero_transfer_emits_event() {
        let mut ledger = ledger();
        let event = ledger.transfer(ALICE, BOB, U256::ZERO).unwrap();
        assert_eq!(event, LedgerEvent::transfer(ALICE, BOB, U256::ZERO));
        assert_eq!(ledger.events().len(), 2);
        assert_eq!(ledger.balance_of(BOB), U256::ZERO);
    }

    #[test]
    fn test_self_transfer_keeps_balance() {
        let mut ledger = ledger();
        ledger.transfer(DEPLOYER, DEPLOYER, units(5)).unwrap();
        assert_eq!(ledger.balance_of(DEPLOYER), units(1_000_000_000));
        ledger.audit().unwrap();
    }

    #[test]
    fn test_transfer_from_null_account_rejected() {
        let mut ledger = ledger();
        let err = ledger.transfer(Address::ZERO, ALICE, U256::ZERO).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::InvalidAccount {
                role: AccountRole::Sender,
                ..
            }
        ));
    }

    #[test]
    fn test_transfer_to_null_account_keeps_supply() {
        let mut ledger = ledger();
        ledger.transfer(DEPLOYER, Address::ZERO, U256::from(7)).unwrap();
        assert_eq!(ledger.balance_of(Address::ZERO), U256::from(7));
        assert_eq!(ledger.total_supply(), units(1_000_000_000));
        ledger.audit().unwrap();
    }

    #[test]
    fn test_approve_overwrites() {
        let mut ledger = ledger();
        ledger.approve(ALICE, BOB, U256::from(10_000)).unwrap();
        assert_eq!(ledger.allowance(ALICE, BOB), U256::from(10_000));

        let event = ledger.approve(ALICE, BOB, U256::from(5_000)).unwrap();
        assert_eq!(event, LedgerEvent::approval(ALICE, BOB, U256::from(5_000)));
        assert_eq!(ledger.allowance(ALICE, BOB), U256::from(5_000));
        assert_eq!(ledger.allowance(BOB, ALICE), U256::ZERO);
    }

    #[test]
    fn test_approve_rejects_null_spender() {
        let mut ledger = ledger();
        let before = ledger.clone();
        let err = ledger.approve(ALICE, Address::ZERO, U256::from(1)).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::InvalidAccount {
                role: AccountRole::Spender,
                ..
            }
        ));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_transfer_from_spends_allowance() {
        let mut ledger = ledger();
        ledger.approve(DEPLOYER, ALICE, U256::from(100)).unwrap();

        let event = ledger
            .transfer_from(ALICE, DEPLOYER, BOB, U256::from(60))
            .unwrap();

        assert_eq!(event, LedgerEvent::transfer(DEPLOYER, BOB, U256::from(60)));
        assert_eq!(ledger.allowance(DEPLOYER, ALICE), U256::from(40));
        assert_eq!(ledger.balance_of(BOB), U256::from(60));
        ledger.audit().unwrap();
    }

    #[test]
    fn test_transfer_from_checks_allowance_before_balance() {
        let mut ledger = ledger();
        ledger.approve(ALICE, BOB, U256::from(5)).unwrap();
        let before = ledger.clone();

        // ALICE holds nothing and the allowance is too small: allowance wins.
        let err = ledger
            .transfer_from(BOB, ALICE, BOB, U256::from(6))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientAllowance { .. }));

        let err = ledger
            .transfer_from(BOB, ALICE, BOB, U256::from(5))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBalance { .. }));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_transfer_from_max_allowance_finite_policy() {
        let mut ledger = ledger();
        ledger.approve(DEPLOYER, ALICE, U256::MAX).unwrap();
        ledger
            .transfer_from(ALICE, DEPLOYER, BOB, U256::from(1))
            .unwrap();
        assert_eq!(ledger.allowance(DEPLOYER, ALICE), U256::MAX - U256::from(1));
    }

    #[test]
    fn test_transfer_from_max_allowance_unlimited_policy() {
        let config = TokenConfig::default().with_allowance_policy(AllowancePolicy::UnlimitedAtMax);
        let mut ledger = Ledger::genesis(&config, DEPLOYER).unwrap();
        ledger.approve(DEPLOYER, ALICE, U256::MAX).unwrap();
        ledger
            .transfer_from(ALICE, DEPLOYER, BOB, U256::from(1))
            .unwrap();
        assert_eq!(ledger.allowance(DEPLOYER, ALICE), U256::MAX);

        // Anything below the maximum is still spent down.
        ledger.approve(DEPLOYER, ALICE, U256::from(3)).unwrap();
        ledger
            .transfer_from(ALICE, DEPLOYER, BOB, U256::from(1))
            .unwrap();
        assert_eq!(ledger.allowance(DEPLOYER, ALICE), U256::from(2));
    }

    #[test]
    fn test_increase_and_decrease_allowance() {
        let mut ledger = ledger();
        ledger.approve(ALICE, BOB, U256::from(100)).unwrap();

        let event = ledger.increase_allowance(ALICE, BOB, U256::from(50)).unwrap();
        assert_eq!(event, LedgerEvent::approval(ALICE, BOB, U256::from(150)));

        let event = ledger.decrease_allowance(ALICE, BOB, U256::from(120)).unwrap();
        assert_eq!(event, LedgerEvent::approval(ALICE, BOB, U256::from(30)));
        assert_eq!(ledger.allowance(ALICE, BOB), U256::from(30));
    }

    #[test]
    fn test_decrease_allowance_underflow() {
        let mut ledger = ledger();
        ledger.approve(ALICE, BOB, U256::from(10)).unwrap();
        let before = ledger.clone();

        let err = ledger.decrease_allowance(ALICE, BOB, U256::from(11)).unwrap_err();
        assert_eq!(
            err,
            LedgerError::AllowanceUnderflow {
                allowance: U256::from(10),
                subtracted: U256::from(11),
            }
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_increase_allowance_overflow() {
        let mut ledger = ledger();
        ledger.approve(ALICE, BOB, U256::MAX).unwrap();
        let before = ledger.clone();

        let err = ledger.increase_allowance(ALICE, BOB, U256::from(1)).unwrap_err();
        assert_eq!(err, LedgerError::ArithmeticOverflow);
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_burn_reduces_supply() {
        let mut ledger = ledger();
        let event = ledger.burn(DEPLOYER, units(1000)).unwrap();

        assert_eq!(event, LedgerEvent::transfer(DEPLOYER, Address::ZERO, units(1000)));
        assert_eq!(ledger.total_supply(), units(999_999_000));
        assert_eq!(ledger.balance_of(DEPLOYER), units(999_999_000));
        assert_eq!(ledger.balance_of(Address::ZERO), U256::ZERO);
        ledger.audit().unwrap();
    }

    #[test]
    fn test_burn_more_than_balance() {
        let mut ledger = ledger();
        let before = ledger.clone();
        let err = ledger.burn(ALICE, U256::from(1)).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBalance { .. }));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_events_since() {
        let mut ledger = ledger();
        let cursor = ledger.events().len();
        ledger.approve(DEPLOYER, ALICE, U256::from(1)).unwrap();
        ledger.burn(DEPLOYER, U256::from(1)).unwrap();

        assert_eq!(
            ledger.events_since(cursor),
            &[
                LedgerEvent::approval(DEPLOYER, ALICE, U256::from(1)),
                LedgerEvent::transfer(DEPLOYER, Address::ZERO, U256::from(1)),
            ]
        );
        assert!(ledger.events_since(100).is_empty());
    }

    #[test]
    fn test_audit_detects_tampered_snapshot() {
        let ledger = ledger();
        let mut json = serde_json::to_value(&ledger).unwrap();
        json["total_supply"] = serde_json::to_value(U256::from(1)).unwrap();
        let tampered: Ledger = serde_json::from_value(json).unwrap();

        assert!(matches!(
            tampered.audit(),
            Err(LedgerError::ConservationViolated { .. })
        ));
    }

    #[test]
    fn test_snapshot_preserves_state() {
        let mut ledger = ledger();
        ledger.transfer(DEPLOYER, ALICE, U256::from(10)).unwrap();
        ledger.approve(ALICE, BOB, U256::from(3)).unwrap();

        let json = serde_json::to_string(&ledger).unwrap();
        let restored: Ledger = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, ledger);
    }

    #[test]
    fn test_zero_approve_emits_event() {
        let mut ledger = ledger();
        ledger.approve(ALICE, BOB, U256::from(10)).unwrap();

        let event = ledger.approve(ALICE, BOB, U256::ZERO).unwrap();
        assert_eq!(event, LedgerEvent::approval(ALICE, BOB, U256::ZERO));
        assert_eq!(ledger.events().last(), Some(&event));
        assert_eq!(ledger.allowance(ALICE, BOB), U256::ZERO);
    }

    #[test]
    fn test_zero_burn_emits_event() {
        let mut ledger = ledger();
        let cursor = ledger.events().len();

        // ALICE holds nothing, burning nothing still succeeds.
        let event = ledger.burn(ALICE, U256::ZERO).unwrap();
        assert_eq!(event, LedgerEvent::transfer(ALICE, Address::ZERO, U256::ZERO));
        assert_eq!(ledger.events_since(cursor), &[event]);
        assert_eq!(ledger.total_supply(), units(1_000_000_000));
        ledger.audit().unwrap();
    }

    #[test]
    fn test_zero_transfer_from_without_allowance_or_balance() {
        let mut ledger = ledger();
        let cursor = ledger.events().len();

        let event = ledger
            .transfer_from(BOB, ALICE, BOB, U256::ZERO)
            .unwrap();
        assert_eq!(event, LedgerEvent::transfer(ALICE, BOB, U256::ZERO));
        assert_eq!(ledger.events_since(cursor), &[event]);
        assert_eq!(ledger.allowance(ALICE, BOB), U256::ZERO);
        assert_eq!(ledger.balance_of(ALICE), U256::ZERO);
        assert_eq!(ledger.balance_of(BOB), U256::ZERO);
    }

    #[test]
    fn test_transfer_from_emits_only_transfer() {
        let mut ledger = ledger();
        ledger.approve(DEPLOYER, ALICE, U256::from(10)).unwrap();
        let cursor = ledger.events().len();

        ledger
            .transfer_from(ALICE, DEPLOYER, BOB, U256::from(4))
            .unwrap();
        assert_eq!(
            ledger.events_since(cursor),
            &[LedgerEvent::transfer(DEPLOYER, BOB, U256::from(4))]
        );
    }

    #[test]
    fn test_zero_allowance_adjustments_emit_events() {
        let mut ledger = ledger();
        let cursor = ledger.events().len();

        let increased = ledger.increase_allowance(ALICE, BOB, U256::ZERO).unwrap();
        let decreased = ledger.decrease_allowance(ALICE, BOB, U256::ZERO).unwrap();

        assert_eq!(increased, LedgerEvent::approval(ALICE, BOB, U256::ZERO));
        assert_eq!(decreased, LedgerEvent::approval(ALICE, BOB, U256::ZERO));
        assert_eq!(ledger.events_since(cursor), &[increased, decreased]);
        assert_eq!(ledger.allowance(ALICE, BOB), U256::ZERO);
    }
}
