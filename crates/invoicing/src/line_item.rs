use invoicer_core::{DomainError, DomainResult, Money, ValueObject};

/// One row of the invoice table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    item_no: String,
    description: String,
    quantity: u32,
    unit_price: Money,
    /// `quantity × unit_price`, fixed at creation.
    subtotal: Money,
}

impl ValueObject for LineItem {}

impl LineItem {
    /// Build a line item from already-typed values.
    ///
    /// Quantity must be at least one; the subtotal must fit the decimal range.
    pub fn new(
        item_no: impl Into<String>,
        description: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        let subtotal = unit_price
            .checked_times(quantity)
            .ok_or_else(|| DomainError::validation("line amount is too large"))?;

        Ok(Self {
            item_no: item_no.into(),
            description: description.into(),
            quantity,
            unit_price,
            subtotal,
        })
    }

    /// Build a line item from raw form text.
    ///
    /// Item number and description are kept verbatim; quantity and unit price
    /// are trimmed and parsed.
    pub fn parse(
        item_no: &str,
        description: &str,
        quantity_text: &str,
        unit_price_text: &str,
    ) -> DomainResult<Self> {
        let quantity = parse_quantity(quantity_text)?;
        let unit_price = Money::parse(unit_price_text)
            .map_err(|_| DomainError::validation("unit price must be a non-negative number"))?;
        Self::new(item_no, description, quantity, unit_price)
    }

    pub fn item_no(&self) -> &str {
        &self.item_no
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }
}

fn parse_quantity(text: &str) -> DomainResult<u32> {
    let trimmed = text.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| DomainError::validation("quantity must be a whole number"))?;
    if value <= 0 {
        return Err(DomainError::validation("quantity must be positive"));
    }
    u32::try_from(value).map_err(|_| DomainError::validation("quantity is too large"))
}
