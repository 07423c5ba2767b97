//! Domain element descriptors
//!
//! A domain element is a schema-specific XML element (for example
//! `LogicalPartition`) that the HMC embeds inside an Atom `content` wrapper.
//! Its identity is fixed per schema: a namespace URI plus a local name.
//! Types implementing [`DomainElement`] describe that identity and how the
//! element's scalar child elements map onto struct fields, so a single feed
//! decoder can serve every resource type.

use crate::domain::errors::DecodeError;

/// Namespace of the HMC "uom" (universal object model) resource schema
pub const UOM_NAMESPACE: &str = "http://www.ibm.com/xmlns/systems/power/firmware/uom/mc/2012_10/";

/// A record decoded from one domain element of an Atom feed
///
/// Records start from `Default` and receive one [`assign`](Self::assign)
/// call per direct child element, in document order. Children that are never
/// seen leave their field at the zero value. Children the type does not know
/// must be ignored.
///
/// # Example
///
/// ```
/// use hmc_client::domain::element::{parse_int, DomainElement, UOM_NAMESPACE};
/// use hmc_client::domain::errors::DecodeError;
///
/// #[derive(Debug, Default)]
/// struct VirtualIoServer {
///     name: String,
///     id: i64,
/// }
///
/// impl DomainElement for VirtualIoServer {
///     const NAMESPACE: &'static str = UOM_NAMESPACE;
///     const LOCAL_NAME: &'static str = "VirtualIOServer";
///
///     fn assign(&mut self, field: &str, text: &str) -> Result<(), DecodeError> {
///         match field {
///             "PartitionName" => self.name = text.to_string(),
///             "PartitionID" => self.id = parse_int::<Self>(field, text)?,
///             _ => {}
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait DomainElement: Default {
    /// Namespace URI the element must be bound to
    const NAMESPACE: &'static str;

    /// Local (unprefixed) element name
    const LOCAL_NAME: &'static str;

    /// Store the text of the direct child element `field`
    fn assign(&mut self, field: &str, text: &str) -> Result<(), DecodeError>;
}

/// Parse an integer field; blank text is zero
pub fn parse_int<T: DomainElement>(field: &str, text: &str) -> Result<i64, DecodeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse()
        .map_err(|e: std::num::ParseIntError| invalid_field::<T>(field, text, e.to_string()))
}

/// Parse a floating-point field; blank text is zero
pub fn parse_float<T: DomainElement>(field: &str, text: &str) -> Result<f64, DecodeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse()
        .map_err(|e: std::num::ParseFloatError| invalid_field::<T>(field, text, e.to_string()))
}

fn invalid_field<T: DomainElement>(field: &str, value: &str, message: String) -> DecodeError {
    DecodeError::InvalidField {
        element: T::LOCAL_NAME,
        field: field.to_string(),
        value: value.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[derive(Debug, Default)]
    struct Probe;

    impl DomainElement for Probe {
        const NAMESPACE: &'static str = UOM_NAMESPACE;
        const LOCAL_NAME: &'static str = "Probe";

        fn assign(&mut self, _field: &str, _text: &str) -> Result<(), DecodeError> {
            Ok(())
        }
    }

    #[test_case("42", 42 ; "plain")]
    #[test_case("  7\n", 7 ; "surrounding whitespace")]
    #[test_case("", 0 ; "empty")]
    #[test_case("   ", 0 ; "blank")]
    #[test_case("-3", -3 ; "negative")]
    fn test_parse_int(text: &str, expected: i64) {
        assert_eq!(parse_int::<Probe>("PartitionID", text).unwrap(), expected);
    }

    #[test_case("1024.5", 1024.5 ; "decimal")]
    #[test_case("3", 3.0 ; "integral")]
    #[test_case("", 0.0 ; "empty")]
    fn test_parse_float(text: &str, expected: f64) {
        assert_eq!(parse_float::<Probe>("Capacity", text).unwrap(), expected);
    }

    #[test]
    fn test_parse_int_invalid_names_element_and_field() {
        let err = parse_int::<Probe>("PartitionID", "twelve").unwrap_err();
        match err {
            DecodeError::InvalidField {
                element,
                field,
                value,
                ..
            } => {
                assert_eq!(element, "Probe");
                assert_eq!(field, "PartitionID");
                assert_eq!(value, "twelve");
            }
            other => panic!("Expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_float_invalid() {
        assert!(parse_float::<Probe>("FreeSpace", "lots").is_err());
    }
}
