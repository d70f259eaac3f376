//! Tests for a ledger shared between threads.

use ledger::{ledger::DEFAULT_DECIMALS, Address, Amount, Ledger, LedgerEvent, SharedLedger};
use std::thread;

/// Tests that concurrent delegated transfers never overspend an allowance.
#[test]
fn test_concurrent_transfer_from_respects_allowance() {
    let owner = Address::repeat_byte(1);
    let spender = Address::repeat_byte(2);
    let shared = SharedLedger::new(Ledger::new(owner, "MyERC20", "MTK", DEFAULT_DECIMALS));
    shared.mint(owner, owner, Amount::from(10_000u64)).unwrap();
    shared.approve(owner, spender, Amount::from(250u64)).unwrap();
    let mut events = shared.subscribe();

    let handles: Vec<_> = (3u8..11)
        .map(|n| {
            let shared = shared.clone();
            thread::spawn(move || {
                (0..100)
                    .filter(|_| {
                        let to = Address::repeat_byte(n);
                        shared
                            .transfer_from(spender, owner, to, Amount::from(1u64))
                            .is_ok()
                    })
                    .count()
            })
        })
        .collect();
    let succeeded: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

    assert_eq!(succeeded, 250);
    assert_eq!(shared.allowance(owner, spender), Amount::ZERO);
    assert_eq!(shared.balance_of(owner), Amount::from(9_750u64));
    assert_eq!(shared.total_supply(), Amount::from(10_000u64));

    let transfers = std::iter::from_fn(|| events.try_recv().ok())
        .filter(|e| matches!(e, LedgerEvent::Transfer { .. }))
        .count();
    assert_eq!(transfers, 250);
}

/// Tests that an observer on another task sees every event of a shared ledger.
#[tokio::test]
async fn test_observer_task_receives_events() {
    let owner = Address::repeat_byte(1);
    let shared = SharedLedger::new(Ledger::new(owner, "MyERC20", "MTK", DEFAULT_DECIMALS));
    let mut events = shared.subscribe();

    let observer = tokio::spawn(async move {
        let mut count = 0;
        while let Some(_event) = events.recv().await {
            count += 1;
        }
        count
    });

    for n in 2u8..7 {
        shared.mint(owner, Address::repeat_byte(n), Amount::from(5u64)).unwrap();
    }
    drop(shared);

    assert_eq!(observer.await.unwrap(), 5);
}
