//! Form state: the text currently typed into each field.

use core::str::FromStr;

use invoicer_invoicing::InvoiceDetails;
use thiserror::Error;

/// Every input field on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ClientName,
    ClientAddress,
    CustomerRef,
    OurRef,
    ItemNo,
    Description,
    Quantity,
    UnitPrice,
}

impl Field {
    /// Fields in on-screen order.
    pub const ALL: [Field; 8] = [
        Field::ClientName,
        Field::ClientAddress,
        Field::CustomerRef,
        Field::OurRef,
        Field::ItemNo,
        Field::Description,
        Field::Quantity,
        Field::UnitPrice,
    ];

    /// Identifier typed on the console.
    pub fn key(self) -> &'static str {
        match self {
            Field::ClientName => "client_name",
            Field::ClientAddress => "client_address",
            Field::CustomerRef => "customer_ref",
            Field::OurRef => "our_ref",
            Field::ItemNo => "item_no",
            Field::Description => "description",
            Field::Quantity => "quantity",
            Field::UnitPrice => "unit_price",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::ClientName => "Client Name:",
            Field::ClientAddress => "Client Address:",
            Field::CustomerRef => "Customer REF:",
            Field::OurRef => "Our REF:",
            Field::ItemNo => "Item nº:",
            Field::Description => "Description:",
            Field::Quantity => "Quantity:",
            Field::UnitPrice => "Unit Price:",
        }
    }

    /// True for the four per-item fields reset after each added item.
    pub fn is_item_field(self) -> bool {
        matches!(
            self,
            Field::ItemNo | Field::Description | Field::Quantity | Field::UnitPrice
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    /// Accepts the key in any case, with `-` in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Field::ALL
            .into_iter()
            .find(|f| f.key() == wanted)
            .ok_or_else(|| UnknownField(s.trim().to_string()))
    }
}

/// Per-item entry fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFields {
    pub item_no: String,
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
}

impl ItemFields {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Contents of the whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub client_name: String,
    pub client_address: String,
    pub customer_ref: String,
    pub our_ref: String,
    pub item: ItemFields,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ClientName => &self.client_name,
            Field::ClientAddress => &self.client_address,
            Field::CustomerRef => &self.customer_ref,
            Field::OurRef => &self.our_ref,
            Field::ItemNo => &self.item.item_no,
            Field::Description => &self.item.description,
            Field::Quantity => &self.item.quantity,
            Field::UnitPrice => &self.item.unit_price,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::ClientName => &mut self.client_name,
            Field::ClientAddress => &mut self.client_address,
            Field::CustomerRef => &mut self.customer_ref,
            Field::OurRef => &mut self.our_ref,
            Field::ItemNo => &mut self.item.item_no,
            Field::Description => &mut self.item.description,
            Field::Quantity => &mut self.item.quantity,
            Field::UnitPrice => &mut self.item.unit_price,
        };
        *slot = value.into();
    }

    /// Invoice details as currently typed.
    pub fn details(&self) -> InvoiceDetails {
        InvoiceDetails {
            client_name: self.client_name.clone(),
            client_address: self.client_address.clone(),
            customer_ref: self.customer_ref.clone(),
            our_ref: self.our_ref.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_keys_parse_loosely() {
        assert_eq!("client_name".parse::<Field>().unwrap(), Field::ClientName);
        assert_eq!("Unit-Price".parse::<Field>().unwrap(), Field::UnitPrice);
        assert_eq!(
            "colour".parse::<Field>().unwrap_err(),
            UnknownField("colour".to_string())
        );
    }

    #[test]
    fn set_and_get_cover_every_field() {
        let mut form = FormState::default();
        for (n, field) in Field::ALL.into_iter().enumerate() {
            form.set(field, format!("value {n}"));
        }
        for (n, field) in Field::ALL.into_iter().enumerate() {
            assert_eq!(form.get(field), format!("value {n}"));
        }
    }

    #[test]
    fn clearing_item_fields_keeps_party_fields() {
        let mut form = FormState::default();
        form.set(Field::ClientName, "Acme");
        form.set(Field::Quantity, "3");
        form.item.clear();

        assert_eq!(form.get(Field::ClientName), "Acme");
        for field in Field::ALL.into_iter().filter(|f| f.is_item_field()) {
            assert_eq!(form.get(field), "");
        }
    }
}
