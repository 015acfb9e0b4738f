// ---------------------------------------------------------------------------
// Column schema
// ---------------------------------------------------------------------------

/// Columns an uploaded workbook must contain, in canonical display/export
/// order. Matching is exact and case-sensitive; extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "BRANCH",
    "ROUTE_NUMBER",
    "VEHICLE_NUMBER",
    "ROUTE_NAME",
    "TYPE",
    "OPERATING_KM_COST",
    "EARNING_PER_KM",
    "REMARKS",
];

/// Serial column some source files carry; dropped on load.
pub const SERIAL_COLUMN: &str = "SNO";

// ---------------------------------------------------------------------------
// Record – one row of the uploaded table
// ---------------------------------------------------------------------------

/// One vehicle/route performance row.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub branch: String,
    pub route_number: String,
    pub vehicle_number: String,
    pub route_name: String,
    /// Service type, free-form categorical ("Express", "Town", ...).
    pub kind: String,
    /// Operating cost per km, whole rupees.
    pub operating_km_cost: i64,
    /// Earnings per km, rounded to 2 decimal places on load.
    pub earning_per_km: f64,
    pub remarks: String,
}

impl Record {
    /// Cell values in canonical column order, formatted for display.
    pub fn display_cells(&self) -> [String; 8] {
        [
            self.branch.clone(),
            self.route_number.clone(),
            self.vehicle_number.clone(),
            self.route_name.clone(),
            self.kind.clone(),
            self.operating_km_cost.to_string(),
            format!("{:.2}", self.earning_per_km),
            self.remarks.clone(),
        ]
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete validated table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Only the loader constructs one, so holding a
/// `Dataset` implies the source table passed schema validation.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All records, in source-file order.
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
