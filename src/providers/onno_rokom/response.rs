//! Response parsing for the Onno Rokom SOAP API.

use super::errors::OnnoRokomError;
use super::types::Operation;
use roxmltree::{Document, Node};

/// Decoded SOAP response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoapResponse {
    /// Text of the operation's result element.
    Result(String),
    /// SOAP fault.
    Fault { code: String, message: String },
}

impl SoapResponse {
    /// Parse a SOAP response for `operation` from raw text.
    pub fn from_text(text: &str, operation: Operation) -> Result<Self, OnnoRokomError> {
        let doc =
            Document::parse(text).map_err(|e| OnnoRokomError::InvalidEnvelope(e.to_string()))?;

        let envelope = doc.root_element();
        if envelope.tag_name().name() != "Envelope" {
            return Err(OnnoRokomError::InvalidEnvelope(format!(
                "unexpected root element <{}>",
                envelope.tag_name().name()
            )));
        }

        let body = child_element(envelope, "Body")
            .ok_or_else(|| OnnoRokomError::InvalidEnvelope("missing Body".to_string()))?;

        if let Some(fault) = child_element(body, "Fault") {
            return Ok(parse_fault(fault));
        }

        let element = operation.result_element();
        let result = body
            .descendants()
            .find(|n| n.is_element() && n.tag_name().name() == element)
            .ok_or_else(|| OnnoRokomError::MissingResult {
                element: element.to_string(),
            })?;

        Ok(Self::Result(result.text().unwrap_or_default().to_string()))
    }

    /// Convert into a Result for ergonomic error handling.
    pub fn into_result(self) -> Result<String, OnnoRokomError> {
        match self {
            Self::Result(value) => Ok(value),
            Self::Fault { code, message } => Err(OnnoRokomError::SoapFault { code, message }),
        }
    }
}

fn child_element<'a, 'input: 'a>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn descendant_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.descendants()
        .find(|n| n.is_element() && n.tag_name().name() == name)
        .and_then(|n| n.text())
        .map(|s| s.trim().to_string())
}

/// SOAP 1.1 faults use `faultcode`/`faultstring`, SOAP 1.2 `Code/Value`/`Reason/Text`.
fn parse_fault(fault: Node<'_, '_>) -> SoapResponse {
    let code = descendant_text(fault, "faultcode")
        .or_else(|| child_element(fault, "Code").and_then(|c| descendant_text(c, "Value")))
        .unwrap_or_default();
    let message = descendant_text(fault, "faultstring")
        .or_else(|| child_element(fault, "Reason").and_then(|r| descendant_text(r, "Text")))
        .unwrap_or_default();

    SoapResponse::Fault { code, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema">
  <soap:Body>{}</soap:Body>
</soap:Envelope>"#,
            body
        )
    }

    #[test]
    fn test_result_element_text() {
        let xml = envelope(
            r#"<OneToOneResponse xmlns="https://api2.onnorokomsms.com/"><OneToOneResult>1900||01711000000||987654/</OneToOneResult></OneToOneResponse>"#,
        );

        let response = SoapResponse::from_text(&xml, Operation::OneToOne).unwrap();
        assert_eq!(
            response,
            SoapResponse::Result("1900||01711000000||987654/".to_string())
        );
    }

    #[test]
    fn test_empty_result_element() {
        let xml = envelope(
            r#"<GetBalanceResponse xmlns="https://api2.onnorokomsms.com/"><GetBalanceResult /></GetBalanceResponse>"#,
        );

        let value = SoapResponse::from_text(&xml, Operation::GetBalance)
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(value, "");
    }

    #[test]
    fn test_soap11_fault() {
        let xml = envelope(
            r#"<soap:Fault><faultcode>soap:Client</faultcode><faultstring>Server was unable to read request.</faultstring></soap:Fault>"#,
        );

        match SoapResponse::from_text(&xml, Operation::GetBalance).unwrap() {
            SoapResponse::Fault { code, message } => {
                assert_eq!(code, "soap:Client");
                assert_eq!(message, "Server was unable to read request.");
            }
            SoapResponse::Result(_) => panic!("Expected fault"),
        }
    }

    #[test]
    fn test_soap12_fault() {
        let xml = r#"<env:Envelope xmlns:env="http://www.w3.org/2003/05/soap-envelope">
  <env:Body>
    <env:Fault>
      <env:Code><env:Value>env:Receiver</env:Value></env:Code>
      <env:Reason><env:Text xml:lang="en">Processing error</env:Text></env:Reason>
    </env:Fault>
  </env:Body>
</env:Envelope>"#;

        let error = SoapResponse::from_text(xml, Operation::OneToOne)
            .unwrap()
            .into_result()
            .unwrap_err();
        match error {
            OnnoRokomError::SoapFault { code, message } => {
                assert_eq!(code, "env:Receiver");
                assert_eq!(message, "Processing error");
            }
            other => panic!("Expected SoapFault, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_result_element() {
        let xml = envelope("<SomethingElse />");
        let error = SoapResponse::from_text(&xml, Operation::OneToOne).unwrap_err();
        assert!(matches!(
            error,
            OnnoRokomError::MissingResult { ref element } if element == "OneToOneResult"
        ));
    }

    #[test]
    fn test_not_xml() {
        let error = SoapResponse::from_text("<html>oops", Operation::OneToOne).unwrap_err();
        assert!(matches!(error, OnnoRokomError::InvalidEnvelope(_)));

        let error = SoapResponse::from_text("<html/>", Operation::OneToOne).unwrap_err();
        assert!(matches!(error, OnnoRokomError::InvalidEnvelope(_)));
    }
}
