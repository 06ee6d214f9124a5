use chrono::NaiveDate;

use invoicer_core::{DomainError, DomainResult, Money};

use crate::line_item::LineItem;

/// Party and reference fields typed by the user at generation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceDetails {
    pub client_name: String,
    pub client_address: String,
    pub customer_ref: String,
    pub our_ref: String,
}

impl InvoiceDetails {
    /// Labels of required fields that are empty (whitespace counts as empty).
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("client name", &self.client_name),
            ("client address", &self.client_address),
            ("customer reference", &self.customer_ref),
            ("our reference", &self.our_ref),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }
}

/// Header data printed above the item table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceMetadata {
    pub date: NaiveDate,
    pub customer_ref: String,
    pub our_ref: String,
    pub client_name: String,
    pub client_address: String,
}

/// Finalised invoice handed to the renderer.
///
/// Built once per generate action and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    metadata: InvoiceMetadata,
    items: Vec<LineItem>,
    total: Money,
}

impl Invoice {
    /// Snapshot `items` under `details`.
    ///
    /// Invariant: `total` is the exact sum of the item subtotals.
    pub fn issue(details: &InvoiceDetails, items: &[LineItem], date: NaiveDate) -> DomainResult<Self> {
        let mut missing = details.missing_fields();
        if items.is_empty() {
            missing.push("line items");
        }
        if !missing.is_empty() {
            return Err(DomainError::missing_field(missing.join(", ")));
        }

        let total = sum_subtotals(items)?;

        Ok(Self {
            metadata: InvoiceMetadata {
                date,
                customer_ref: details.customer_ref.clone(),
                our_ref: details.our_ref.clone(),
                client_name: details.client_name.clone(),
                client_address: details.client_address.clone(),
            },
            items: items.to_vec(),
            total,
        })
    }

    pub fn metadata(&self) -> &InvoiceMetadata {
        &self.metadata
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// File name the rendered document is written under.
    pub fn file_name(&self) -> String {
        output_file_name(&self.metadata.customer_ref)
    }
}

pub(crate) fn sum_subtotals(items: &[LineItem]) -> DomainResult<Money> {
    items.iter().try_fold(Money::ZERO, |acc, item| {
        acc.checked_add(item.subtotal())
            .ok_or_else(|| DomainError::invariant("invoice total overflow"))
    })
}

/// Output file name for a customer reference: `Invoice_<customer_ref>.pdf`.
///
/// Depends on nothing but the reference, so reusing a reference targets the
/// same file. Path separators and NUL are replaced with `_`.
pub fn output_file_name(customer_ref: &str) -> String {
    let safe: String = customer_ref
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            other => other,
        })
        .collect();
    format!("Invoice_{safe}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn details() -> InvoiceDetails {
        InvoiceDetails {
            client_name: "Acme".to_string(),
            client_address: "1 Main St".to_string(),
            customer_ref: "C100".to_string(),
            our_ref: "R1".to_string(),
        }
    }

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    #[test]
    fn issue_sums_subtotals() {
        let items = vec![
            LineItem::parse("1", "A", "2", "10.00").unwrap(),
            LineItem::parse("2", "B", "1", "5.00").unwrap(),
        ];
        let invoice = Invoice::issue(&details(), &items, test_date()).unwrap();
        assert_eq!(invoice.total().amount(), Decimal::new(2500, 2));
        assert_eq!(invoice.items(), items.as_slice());
        assert_eq!(invoice.metadata().date, test_date());
        assert_eq!(invoice.metadata().customer_ref, "C100");
    }

    #[test]
    fn issue_without_items_is_missing_field() {
        let err = Invoice::issue(&details(), &[], test_date()).unwrap_err();
        assert_eq!(err, DomainError::missing_field("line items"));
    }

    #[test]
    fn issue_names_every_empty_field() {
        let items = vec![LineItem::parse("1", "A", "1", "1").unwrap()];
        let partial = InvoiceDetails {
            client_address: "   ".to_string(),
            our_ref: String::new(),
            ..details()
        };
        let err = Invoice::issue(&partial, &items, test_date()).unwrap_err();
        assert_eq!(
            err,
            DomainError::missing_field("client address, our reference")
        );
    }

    #[test]
    fn each_blank_detail_is_reported_alone() {
        let items = vec![LineItem::parse("1", "A", "1", "1").unwrap()];
        for blank in ["", " \t "] {
            let blank = blank.to_string();
            let cases = [
                ("client name", InvoiceDetails { client_name: blank.clone(), ..details() }),
                ("client address", InvoiceDetails { client_address: blank.clone(), ..details() }),
                ("customer reference", InvoiceDetails { customer_ref: blank.clone(), ..details() }),
                ("our reference", InvoiceDetails { our_ref: blank.clone(), ..details() }),
            ];

            for (label, partial) in cases {
                let err = Invoice::issue(&partial, &items, test_date()).unwrap_err();
                assert_eq!(err, DomainError::missing_field(label), "blank {label}");
            }
        }
    }

    #[test]
    fn file_name_depends_only_on_customer_ref() {
        assert_eq!(output_file_name("C100"), "Invoice_C100.pdf");

        let items = vec![LineItem::parse("1", "A", "1", "1").unwrap()];
        let a = Invoice::issue(&details(), &items, test_date()).unwrap();
        let other = InvoiceDetails {
            client_name: "Globex".to_string(),
            our_ref: "R9".to_string(),
            ..details()
        };
        let b = Invoice::issue(&other, &items, test_date()).unwrap();
        assert_eq!(a.file_name(), b.file_name());
    }

    #[test]
    fn file_name_strips_path_separators() {
        assert_eq!(output_file_name("../etc/x"), "Invoice_.._etc_x.pdf");
        assert_eq!(output_file_name(r"a\b"), "Invoice_a_b.pdf");
    }
}
