//! SOAP 1.1 request envelopes.

use super::types::{Operation, SERVICE_NAMESPACE};
use quick_xml::escape::escape;
use std::fmt::Write;

const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";

/// Content type of SOAP 1.1 requests.
pub const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Render the request envelope for `operation` with `params` in order.
///
/// Parameter values are XML-escaped; names are fixed identifiers.
pub(crate) fn build_envelope(operation: Operation, params: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, value) in params {
        // Writing to a String cannot fail.
        let _ = write!(body, "<{name}>{}</{name}>", escape(*value));
    }

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:xsi="{XSI_NS}" xmlns:xsd="{XSD_NS}" xmlns:soap="{SOAP_ENV_NS}">
  <soap:Body>
    <{op} xmlns="{SERVICE_NAMESPACE}">{body}</{op}>
  </soap:Body>
</soap:Envelope>"#,
        op = operation.name(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_wraps_params_in_operation_element() {
        let xml = build_envelope(
            Operation::GetBalance,
            &[("userName", "shop"), ("userPassword", "pw")],
        );

        assert!(xml.contains(
            r#"<GetBalance xmlns="https://api2.onnorokomsms.com/"><userName>shop</userName><userPassword>pw</userPassword></GetBalance>"#
        ));
        assert!(xml.contains("<soap:Body>"));
    }

    #[test]
    fn test_envelope_escapes_values() {
        let xml = build_envelope(Operation::OneToOne, &[("smsText", "Tom & Jerry <3")]);
        assert!(xml.contains("<smsText>Tom &amp; Jerry &lt;3</smsText>"));
    }

    #[test]
    fn test_envelope_is_well_formed() {
        let xml = build_envelope(Operation::OneToOne, &[("smsText", "a\"b'c")]);
        let doc = roxmltree::Document::parse(&xml).unwrap();

        let text = doc
            .descendants()
            .find(|n| n.tag_name().name() == "smsText")
            .and_then(|n| n.text());
        assert_eq!(text, Some("a\"b'c"));
    }
}
