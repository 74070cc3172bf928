use bigdecimal::BigDecimal;
use serde::Serialize;

pub trait PricedLine {
    fn unit_price(&self) -> &BigDecimal;
    fn quantity(&self) -> i32;
}

pub fn line_total<L: PricedLine>(line: &L) -> BigDecimal {
    line.unit_price() * &BigDecimal::from(line.quantity())
}

pub fn sub_total<'a, L, I>(lines: I) -> BigDecimal
where
    L: PricedLine + 'a,
    I: IntoIterator<Item = &'a L>,
{
    lines
        .into_iter()
        .fold(BigDecimal::from(0), |acc, line| acc + line_total(line))
}

pub fn grand_total(sub_total: &BigDecimal, delivery_fee: &BigDecimal) -> BigDecimal {
    sub_total + delivery_fee
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Summary {
    pub sub_total: BigDecimal,
    pub delivery_fee: BigDecimal,
    pub total: BigDecimal,
}

impl Summary {
    pub fn from_lines<'a, L, I>(lines: I, delivery_fee: &BigDecimal) -> Self
    where
        L: PricedLine + 'a,
        I: IntoIterator<Item = &'a L>,
    {
        let sub_total = sub_total(lines).with_scale(2);
        let total = grand_total(&sub_total, delivery_fee).with_scale(2);

        Self {
            sub_total,
            delivery_fee: delivery_fee.with_scale(2),
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    struct Line {
        price: BigDecimal,
        quantity: i32,
    }

    impl PricedLine for Line {
        fn unit_price(&self) -> &BigDecimal {
            &self.price
        }

        fn quantity(&self) -> i32 {
            self.quantity
        }
    }

    fn line(price: &str, quantity: i32) -> Line {
        Line {
            price: BigDecimal::from_str(price).unwrap(),
            quantity,
        }
    }

    #[test]
    fn sub_total_is_sum_of_price_times_quantity() {
        let lines = vec![line("5.99", 2), line("3.50", 1), line("0.25", 4)];
        assert_eq!(sub_total(&lines), BigDecimal::from_str("16.48").unwrap());
    }

    #[test]
    fn empty_cart_has_zero_sub_total() {
        let lines: Vec<Line> = vec![];
        assert_eq!(sub_total(&lines), BigDecimal::from(0));
    }

    #[test]
    fn grand_total_adds_the_delivery_fee() {
        let fee = BigDecimal::from_str("2.00").unwrap();
        let summary = Summary::from_lines(&vec![line("10.00", 3)], &fee);

        assert_eq!(summary.sub_total, BigDecimal::from_str("30").unwrap());
        assert_eq!(summary.delivery_fee, fee);
        assert_eq!(summary.total, BigDecimal::from_str("32.00").unwrap());
    }

    #[test]
    fn summary_amounts_serialize_with_two_decimals() {
        let fee = BigDecimal::from_str("2").unwrap();
        let summary = Summary::from_lines(&vec![line("1.5", 1)], &fee);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["sub_total"], "1.50");
        assert_eq!(json["delivery_fee"], "2.00");
        assert_eq!(json["total"], "3.50");
    }
}
