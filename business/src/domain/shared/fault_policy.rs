use std::str::FromStr;

/// What a use case does when the local store fails underneath it.
///
/// `Absorb` keeps the storefront rendering no matter what: reads degrade to
/// an empty result, writes are dropped, and the fault is only logged.
/// `Surface` propagates the error to the caller so the UI layer can
/// distinguish "truly empty" from "store unavailable".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreFaultPolicy {
    #[default]
    Absorb,
    Surface,
}

impl FromStr for StoreFaultPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absorb" => Ok(StoreFaultPolicy::Absorb),
            "surface" => Ok(StoreFaultPolicy::Surface),
            other => Err(format!("unknown store fault policy: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_policies() {
        assert_eq!(
            "absorb".parse::<StoreFaultPolicy>().unwrap(),
            StoreFaultPolicy::Absorb
        );
        assert_eq!(
            " Surface ".parse::<StoreFaultPolicy>().unwrap(),
            StoreFaultPolicy::Surface
        );
    }

    #[test]
    fn should_reject_unknown_policy() {
        assert!("retry".parse::<StoreFaultPolicy>().is_err());
    }

    #[test]
    fn should_default_to_absorb() {
        assert_eq!(StoreFaultPolicy::default(), StoreFaultPolicy::Absorb);
    }
}
