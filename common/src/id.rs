//! アイテムID生成
//!
//! 作成時刻（ミリ秒）をベースにしつつ、同一ミリ秒内の連続作成でも
//! 重複しないよう単調増加を保証する。

use crate::types::Item;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// 既存アイテムの最大IDを起点にする
    pub fn seeded_from(items: &[Item]) -> Self {
        Self {
            last: items.iter().map(|item| item.id).max().unwrap_or(0),
        }
    }

    pub fn next(&mut self, now_ms: u64) -> u64 {
        let id = now_ms.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_timestamp() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next(1_700_000_000_000), 1_700_000_000_000);
        assert_eq!(ids.next(1_700_000_000_500), 1_700_000_000_500);
    }

    #[test]
    fn test_same_millisecond_is_unique() {
        let mut ids = IdGenerator::default();
        let a = ids.next(1000);
        let b = ids.next(1000);
        let c = ids.next(1000);
        assert_eq!((a, b, c), (1000, 1001, 1002));
    }

    #[test]
    fn test_clock_going_backwards() {
        let mut ids = IdGenerator::default();
        let a = ids.next(5000);
        let b = ids.next(4000);
        assert!(b > a);
    }

    #[test]
    fn test_seeded_from_items() {
        let items = vec![
            Item { id: 30, name: "a".into(), quantity: 1, category: "c".into() },
            Item { id: 90, name: "b".into(), quantity: 1, category: "c".into() },
        ];
        let mut ids = IdGenerator::seeded_from(&items);
        assert_eq!(ids.next(50), 91);
    }
}
