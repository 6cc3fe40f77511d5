//! Data model for renter records

/// A single renter as shown in the roster table
///
/// All values are display text. The address and deposit columns hold
/// placeholders until accounts are linked; the lease date fields and the
/// default/assignment flags are only set where a value is actually known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenterRecord {
    pub address: String,
    pub name: String,
    pub email: String,
    pub ether_held: String,
    pub lease_start_date: Option<String>,
    pub last_payment_date: Option<String>,
    pub in_default: Option<bool>,
    pub assigned: Option<bool>,
}

impl RenterRecord {
    /// Column labels for the roster table, in display order
    pub const COLUMNS: [&'static str; 8] = [
        "Ethereum Address",
        "Name",
        "Email",
        "Ether Held",
        "Lease Start Date",
        "Last Payment Date",
        "inDefault",
        "_assigned",
    ];

    /// Record with the placeholder address and deposit status shared by
    /// every current roster entry
    fn with_contact(name: &str, email: &str) -> RenterRecord {
        RenterRecord {
            address: "0x".to_string(),
            name: name.to_string(),
            email: email.to_string(),
            ether_held: "none so far".to_string(),
            lease_start_date: None,
            last_payment_date: None,
            in_default: None,
            assigned: None,
        }
    }

    /// The fixed roster, in insertion order
    pub fn roster() -> Vec<RenterRecord> {
        vec![
            RenterRecord {
                lease_start_date: Some("28th Aug 2017".to_string()),
                ..Self::with_contact("Thomas", "thomasmillerprivate@gmail.com")
            },
            Self::with_contact("Barry", "barry@earsman.com"),
            Self::with_contact("Sam", "pospi@spadgos.com"),
            RenterRecord {
                last_payment_date: Some("none so far".to_string()),
                ..Self::with_contact("Kris", "kris.randall@gmail.com")
            },
        ]
    }

    /// Table cells for this record, in column order
    ///
    /// A field with no value contributes no cell, so a row may carry fewer
    /// cells than the header declares. Rows are not padded to the full
    /// column count.
    pub fn cells(&self) -> Vec<String> {
        let mut cells = vec![
            self.address.clone(),
            self.name.clone(),
            self.email.clone(),
            self.ether_held.clone(),
        ];
        if let Some(date) = &self.lease_start_date {
            cells.push(date.clone());
        }
        if let Some(date) = &self.last_payment_date {
            cells.push(date.clone());
        }
        if let Some(in_default) = self.in_default {
            cells.push(in_default.to_string());
        }
        if let Some(assigned) = self.assigned {
            cells.push(assigned.to_string());
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_declare_eight_labels() {
        assert_eq!(
            RenterRecord::COLUMNS,
            [
                "Ethereum Address",
                "Name",
                "Email",
                "Ether Held",
                "Lease Start Date",
                "Last Payment Date",
                "inDefault",
                "_assigned",
            ]
        );
    }

    #[test]
    fn test_roster_order() {
        let roster = RenterRecord::roster();
        let names: Vec<&str> = roster.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Thomas", "Barry", "Sam", "Kris"]);
    }

    #[test]
    fn test_roster_cells_match_fixture() {
        let roster = RenterRecord::roster();
        assert_eq!(roster.len(), 4);

        assert_eq!(
            roster[0].cells(),
            [
                "0x",
                "Thomas",
                "thomasmillerprivate@gmail.com",
                "none so far",
                "28th Aug 2017",
            ]
        );
        assert_eq!(
            roster[1].cells(),
            ["0x", "Barry", "barry@earsman.com", "none so far"]
        );
        assert_eq!(
            roster[2].cells(),
            ["0x", "Sam", "pospi@spadgos.com", "none so far"]
        );
        assert_eq!(
            roster[3].cells(),
            [
                "0x",
                "Kris",
                "kris.randall@gmail.com",
                "none so far",
                "none so far",
            ]
        );
    }

    #[test]
    fn test_rows_are_not_padded_to_header_width() {
        for record in RenterRecord::roster() {
            let cells = record.cells();
            assert!(cells.len() >= 4);
            assert!(cells.len() < RenterRecord::COLUMNS.len());
        }
    }

    #[test]
    fn test_roster_is_idempotent() {
        assert_eq!(RenterRecord::roster(), RenterRecord::roster());
    }

    #[test]
    fn test_flags_render_when_populated() {
        let mut record = RenterRecord::roster().remove(1);
        record.in_default = Some(true);
        record.assigned = Some(false);
        let cells = record.cells();
        assert_eq!(cells[4], "true");
        assert_eq!(cells[5], "false");
    }
}
