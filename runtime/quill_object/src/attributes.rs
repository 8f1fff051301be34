//! Per-slot property attributes.
//!
//! Attributes gate writes, ordinary enumeration, and redefinition of a
//! record slot. The hidden key space is structural, not attribute-driven:
//! a symbol-keyed slot may carry `ENUMERABLE` and is still excluded from
//! ordinary enumeration.

use bitflags::bitflags;

bitflags! {
    /// Attributes of one record slot.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct PropertyAttributes: u8 {
        /// Slot value may be replaced through `insert`.
        const WRITABLE = 1 << 0;
        /// Slot is surfaced by ordinary enumeration and serialization
        /// (string keys only; symbol keys are never surfaced).
        const ENUMERABLE = 1 << 1;
        /// Slot may be redefined or removed.
        const CONFIGURABLE = 1 << 2;
    }
}

impl PropertyAttributes {
    #[inline]
    pub fn is_writable(self) -> bool {
        self.contains(PropertyAttributes::WRITABLE)
    }

    #[inline]
    pub fn is_enumerable(self) -> bool {
        self.contains(PropertyAttributes::ENUMERABLE)
    }

    #[inline]
    pub fn is_configurable(self) -> bool {
        self.contains(PropertyAttributes::CONFIGURABLE)
    }
}

/// Plain data slots are writable, enumerable, and configurable.
impl Default for PropertyAttributes {
    fn default() -> Self {
        PropertyAttributes::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_plain_data() {
        let attrs = PropertyAttributes::default();
        assert!(attrs.is_writable());
        assert!(attrs.is_enumerable());
        assert!(attrs.is_configurable());
    }

    #[test]
    fn flags_are_independent() {
        let attrs = PropertyAttributes::WRITABLE | PropertyAttributes::CONFIGURABLE;
        assert!(attrs.is_writable());
        assert!(!attrs.is_enumerable());
        assert!(attrs.is_configurable());
    }
}
