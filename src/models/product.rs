use crate::error::ParseFieldError;
use std::fmt;
use std::str::FromStr;

/// The products a respondent can say they purchased.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Product {
    Product1,
    Product2,
    Product3,
}

impl Product {
    /// Menu order.
    pub const ALL: [Product; 3] = [Product::Product1, Product::Product2, Product::Product3];

    pub fn label(self) -> &'static str {
        match self {
            Product::Product1 => "Product 1",
            Product::Product2 => "Product 2",
            Product::Product3 => "Product 3",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Product {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Product::ALL
            .into_iter()
            .find(|product| product.label() == s)
            .ok_or_else(|| ParseFieldError::UnknownProduct(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for product in Product::ALL {
            assert_eq!(product.label().parse::<Product>(), Ok(product));
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert_eq!(
            "Product 4".parse::<Product>(),
            Err(ParseFieldError::UnknownProduct("Product 4".into()))
        );
        assert!("product 1".parse::<Product>().is_err());
    }
}
