//! Unit tests for sq-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CompanyId, DeskId, PointId, TransactionId};

    #[test]
    fn index_roundtrip() {
        let id = PointId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PointId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(DeskId(0) < DeskId(1));
        assert!(CompanyId(100) > CompanyId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(CompanyId::INVALID.0, u16::MAX);
        assert_eq!(PointId::INVALID.0, u32::MAX);
        assert_eq!(DeskId::INVALID.0, u32::MAX);
        assert_eq!(TransactionId::INVALID.0, u16::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(DeskId(7).to_string(), "DeskId(7)");
    }
}

#[cfg(test)]
mod minutes {
    use crate::Minutes;

    #[test]
    fn arithmetic() {
        assert_eq!(Minutes(10) + Minutes(5), Minutes(15));
        assert_eq!(Minutes(10).saturating_sub(Minutes(4)), Minutes(6));
        assert_eq!(Minutes(3).saturating_sub(Minutes(10)), Minutes::ZERO);
    }

    #[test]
    fn since_is_saturating() {
        assert_eq!(Minutes(12).since(Minutes(5)), Minutes(7));
        assert_eq!(Minutes(5).since(Minutes(12)), Minutes::ZERO);
    }

    #[test]
    fn sum() {
        let total: Minutes = [Minutes(5), Minutes(7), Minutes(3)].into_iter().sum();
        assert_eq!(total, Minutes(15));
    }

    #[test]
    fn display() {
        assert_eq!(Minutes(9).to_string(), "9 min");
    }
}

#[cfg(test)]
mod ticket {
    use crate::{TicketError, TicketRegistry};

    #[test]
    fn format_is_three_dash_four() {
        let mut reg = TicketRegistry::new(42);
        let code = reg.issue().unwrap();
        let s = code.as_str();
        assert_eq!(s.len(), 8);
        let (block3, rest) = s.split_at(3);
        let block4 = &rest[1..];
        assert_eq!(&rest[..1], "-");
        let b3: u16 = block3.parse().unwrap();
        let b4: u16 = block4.parse().unwrap();
        assert!((100..=999).contains(&b3), "got {b3}");
        assert!((1000..=9999).contains(&b4), "got {b4}");
    }

    #[test]
    fn codes_are_pairwise_distinct() {
        let mut reg = TicketRegistry::new(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1_000 {
            let code = reg.issue().unwrap();
            assert!(seen.insert(code), "duplicate ticket issued");
        }
        assert_eq!(reg.issued_count(), 1_000);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = TicketRegistry::new(123);
        let mut b = TicketRegistry::new(123);
        for _ in 0..20 {
            assert_eq!(a.issue().unwrap(), b.issue().unwrap());
        }
    }

    #[test]
    fn issued_membership() {
        let mut reg = TicketRegistry::new(1);
        let code = reg.issue().unwrap();
        assert!(reg.is_issued(&code));
    }

    #[test]
    fn exhausted_retries_error_mentions_bound() {
        let err = TicketError::ExhaustedRetries { attempts: 100 };
        assert!(err.to_string().contains("100"));
    }
}
