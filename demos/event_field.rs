use chrono::NaiveDate;
use sovran_variant::{variant, Handler};

variant! {
    /// One field of an imported event record. Member types are arbitrary
    /// caller-supplied types; here one of them comes from chrono.
    #[derive(Debug, Clone)]
    pub enum EventField {
        Id(u64),
        Label(String),
        Date(NaiveDate),
    }
}

/// Formats a field for a CSV export.
struct Csv;

impl<'a> Handler<&'a u64> for Csv {
    type Output = String;
    fn handle(&mut self, value: &'a u64) -> String {
        value.to_string()
    }
}

impl<'a> Handler<&'a String> for Csv {
    type Output = String;
    fn handle(&mut self, value: &'a String) -> String {
        format!("{:?}", value)
    }
}

impl<'a> Handler<&'a NaiveDate> for Csv {
    type Output = String;
    fn handle(&mut self, value: &'a NaiveDate) -> String {
        value.format("%Y-%m-%d").to_string()
    }
}

fn main() {
    let row = vec![
        EventField::new(42u64),
        EventField::new(String::from("deploy finished")),
        EventField::new(
            NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid calendar date"),
        ),
    ];

    let line: Vec<String> = row.iter().map(|field| field.visit(Csv)).collect();
    println!("{}", line.join(","));

    // Pick fields of a particular type out of the row.
    let dates: Vec<&NaiveDate> = row.iter().filter_map(|f| f.peek::<NaiveDate>()).collect();
    println!("dates in row: {:?}", dates);

    // A type outside the member list is a clean miss across the board.
    assert!(row.iter().all(|f| !f.is_type::<f32>()));
    println!("no f32 fields, as expected");
}
