//! The primitive type layer.
//!
//! `boolean`, `integer` and `string` ride on `bool`, `i32` and `String`
//! directly (their bridge impls live in the codec crate); everything with a
//! stronger lexical form gets a dedicated type here.

mod decimal;
mod lexical;
mod temporal;

pub use decimal::Decimal;
pub use lexical::{
    Base64Binary, Canonical, Code, Id, Integer64, Markdown, Oid, PositiveInt, UnsignedInt, Uri,
    Url, Uuid,
};
pub use temporal::{
    Date, DatePrecision, DateTime, DateTimePrecision, Instant, Time, UtcOffset,
};

#[cfg(test)]
mod property_tests {
    use super::*;
    use quickcheck::{quickcheck, Arbitrary, Gen};

    #[derive(Debug, Clone)]
    struct ArbDate(Date);

    impl Arbitrary for ArbDate {
        fn arbitrary(g: &mut Gen) -> Self {
            let year = i32::arbitrary(g).rem_euclid(9999) + 1;
            let month = u8::arbitrary(g) % 12 + 1;
            let day = u8::arbitrary(g) % 28 + 1;
            let date = match u8::arbitrary(g) % 3 {
                0 => Date::from_year(year),
                1 => Date::from_year_month(year, month),
                _ => Date::from_ymd(year, month, day),
            };
            ArbDate(date.expect("generated components are in range"))
        }
    }

    quickcheck! {
        fn date_parse_render_identity(date: ArbDate) -> bool {
            date.0.render().parse::<Date>() == Ok(date.0)
        }

        fn decimal_literal_round_trips(int_part: i64, scale: u8) -> bool {
            let value = rust_decimal::Decimal::new(int_part, u32::from(scale % 28));
            let decimal = Decimal::from(value);
            decimal.literal().parse::<Decimal>() == Ok(decimal)
        }
    }
}
