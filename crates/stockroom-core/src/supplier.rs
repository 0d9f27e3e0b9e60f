//! # Supplier Orders
//!
//! The detail screen's "order more" action opens the user's mail client
//! addressed to the supplier, with the product name as the subject. This
//! module only builds the `mailto:` link; launching a mail client is the
//! presentation layer's job.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use url::Url;

use crate::error::ValidationError;
use crate::validation::{validate_product_name, ValidationResult};

/// A ready-to-open supplier email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SupplierOrder {
    pub recipient: String,
    pub subject: String,
    /// `mailto:` URI with the subject percent-encoded.
    pub uri: String,
}

impl SupplierOrder {
    /// Builds the order email for a product.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::SupplierOrder;
    ///
    /// let order = SupplierOrder::for_product("orders@acme.test", "Blue Widget").unwrap();
    /// assert_eq!(order.uri, "mailto:orders@acme.test?subject=Blue%20Widget");
    /// ```
    pub fn for_product(supplier_email: &str, product_name: &str) -> ValidationResult<Self> {
        let recipient = supplier_email.trim();
        validate_email(recipient)?;
        validate_product_name(product_name)?;

        let mut uri = Url::parse(&format!("mailto:{}", recipient))
            .map_err(|e| ValidationError::invalid_format("supplier email", e.to_string()))?;
        uri.query_pairs_mut().append_pair("subject", product_name);

        // form-urlencoding writes spaces as '+', which mailto treats literally.
        // A literal '+' has already been escaped to %2B at this point.
        let query = uri.query().unwrap_or_default().replace('+', "%20");
        uri.set_query(Some(&query));

        Ok(SupplierOrder {
            recipient: recipient.to_string(),
            subject: product_name.to_string(),
            uri: uri.into(),
        })
    }
}

/// Characters that would end the recipient part of a `mailto:` URI
/// (query, extra header, fragment) or add another recipient.
const URI_DELIMITERS: &[char] = &['?', '&', '#', ','];

fn validate_email(email: &str) -> ValidationResult<()> {
    if email.is_empty() {
        return Err(ValidationError::required("supplier email"));
    }

    if email.contains(URI_DELIMITERS) {
        return Err(ValidationError::invalid_format(
            "supplier email",
            "must not contain '?', '&', '#' or ','",
        ));
    }

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        return Err(ValidationError::invalid_format(
            "supplier email",
            "must look like name@domain",
        ));
    }

    Ok(())
}
