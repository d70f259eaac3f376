//! Tests for the token lifecycle as seen by a deployer and two accounts.

use cli::accounts::signers;
use ledger::{
    ledger::DEFAULT_DECIMALS, Address, Amount, Ledger, LedgerError, LedgerEvent,
};
use tokio::sync::mpsc::UnboundedReceiver;

struct Fixture {
    deployer: Address,
    acc1: Address,
    acc2: Address,
    token: Ledger,
    events: UnboundedReceiver<LedgerEvent>,
}

fn deploy() -> Fixture {
    let accounts = signers(3);
    let mut token = Ledger::new(accounts[0], "MyERC20", "MTK", DEFAULT_DECIMALS);
    let events = token.subscribe();
    Fixture {
        deployer: accounts[0],
        acc1: accounts[1],
        acc2: accounts[2],
        token,
        events,
    }
}

fn amount(v: u64) -> Amount {
    Amount::from(v)
}

fn drain(events: &mut UnboundedReceiver<LedgerEvent>) -> Vec<LedgerEvent> {
    std::iter::from_fn(|| events.try_recv().ok()).collect()
}

/// Tests the metadata fixed at construction.
#[test]
fn test_constructor() {
    let f = deploy();
    assert_eq!(f.token.name(), "MyERC20");
    assert_eq!(f.token.symbol(), "MTK");
    assert_eq!(f.token.owner(), f.deployer);
    assert_eq!(f.token.decimals(), 18);
    assert_eq!(f.token.total_supply(), Amount::ZERO);
}

/// Tests minting to the deployer and to another account.
#[test]
fn test_mint() {
    let mut f = deploy();

    f.token.mint(f.deployer, f.deployer, amount(1000)).unwrap();
    assert_eq!(f.token.balance_of(f.deployer), amount(1000));

    f.token.mint(f.deployer, f.acc1, amount(1000)).unwrap();
    assert_eq!(f.token.balance_of(f.acc1), amount(1000));
    assert_eq!(f.token.total_supply(), amount(2000));

    let events = drain(&mut f.events);
    assert_eq!(
        events.last(),
        Some(&LedgerEvent::Transfer {
            from: Address::ZERO,
            to: f.acc1,
            value: amount(1000),
        })
    );
}

/// Tests that only the owner can mint.
#[test]
fn test_mint_by_non_owner() {
    let mut f = deploy();

    let result = f.token.mint(f.acc1, f.acc1, amount(1000));
    assert!(matches!(result, Err(LedgerError::Unauthorized { .. })));
    assert_eq!(f.token.total_supply(), Amount::ZERO);
    assert!(drain(&mut f.events).is_empty());
}

/// Tests transfers out of a minted balance.
#[test]
fn test_transfer() {
    let mut f = deploy();
    f.token.mint(f.deployer, f.deployer, amount(1000)).unwrap();

    f.token.transfer(f.deployer, f.acc1, amount(1000)).unwrap();
    assert_eq!(f.token.balance_of(f.acc1), amount(1000));
    assert_eq!(f.token.balance_of(f.deployer), Amount::ZERO);

    let result = f.token.transfer(f.acc2, f.deployer, amount(1000));
    assert!(matches!(result, Err(LedgerError::InsufficientBalance { .. })));

    let result = f.token.transfer(f.acc1, Address::ZERO, amount(1000));
    assert_eq!(result, Err(LedgerError::InvalidRecipient));
    assert_eq!(f.token.balance_of(f.acc1), amount(1000));
}

/// Tests approvals and their events.
#[test]
fn test_approve() {
    let mut f = deploy();
    f.token.mint(f.deployer, f.deployer, amount(1000)).unwrap();
    drain(&mut f.events);

    f.token.approve(f.deployer, f.acc1, amount(1000)).unwrap();
    assert_eq!(f.token.allowance(f.deployer, f.acc1), amount(1000));
    assert_eq!(
        drain(&mut f.events),
        vec![LedgerEvent::Approval {
            owner: f.deployer,
            spender: f.acc1,
            value: amount(1000),
        }]
    );

    let result = f.token.approve(f.deployer, Address::ZERO, amount(1000));
    assert_eq!(result, Err(LedgerError::InvalidSpender));
}

/// Tests delegated transfers against the granted allowance.
#[test]
fn test_transfer_from() {
    let mut f = deploy();
    f.token.mint(f.deployer, f.deployer, amount(1000)).unwrap();
    f.token.approve(f.deployer, f.acc1, amount(1000)).unwrap();

    // The deployer never approved itself
    let result = f
        .token
        .transfer_from(f.deployer, f.deployer, f.acc1, amount(2000));
    assert!(matches!(result, Err(LedgerError::InsufficientAllowance { .. })));
    assert_eq!(f.token.balance_of(f.deployer), amount(1000));
    assert_eq!(f.token.balance_of(f.acc1), Amount::ZERO);

    f.token
        .transfer_from(f.acc1, f.deployer, f.acc1, amount(1000))
        .unwrap();
    assert_eq!(f.token.balance_of(f.acc1), amount(1000));
    assert_eq!(f.token.allowance(f.deployer, f.acc1), Amount::ZERO);
}

/// Tests allowance adjustments.
#[test]
fn test_increase_and_decrease_allowance() {
    let mut f = deploy();

    f.token
        .increase_allowance(f.deployer, f.acc1, amount(2000))
        .unwrap();
    assert_eq!(f.token.allowance(f.deployer, f.acc1), amount(2000));

    f.token
        .decrease_allowance(f.deployer, f.acc1, amount(1000))
        .unwrap();
    assert_eq!(f.token.allowance(f.deployer, f.acc1), amount(1000));

    let result = f
        .token
        .decrease_allowance(f.deployer, f.acc1, amount(1001));
    assert!(matches!(result, Err(LedgerError::AllowanceUnderflow { .. })));
    assert_eq!(f.token.allowance(f.deployer, f.acc1), amount(1000));
}
