//! Base price table.
//!
//! Nested `type → voltage class → power → base price`, built once and never
//! mutated. Dry units have one table per voltage class. Oil units are priced
//! from the 15kV list; the 24kV and 36kV oil tables share that list and carry
//! a voltage-class factor. The factored base is never rounded on its own:
//! `list_price` returns it unrounded and only the final price is rounded.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::{InputVoltage, PowerRating, TransformerKind};

/// Price in whole currency units (BRL).
pub type Price = u64;

/// Dry-type prices at 15kV, `(tenths of kVA, price)`.
const DRY_15KV: [(u32, Price); 21] = [
    (150, 16_650),
    (300, 19_710),
    (450, 20_655),
    (750, 25_110),
    (1125, 26_640),
    (1500, 28_305),
    (2250, 37_080),
    (3000, 42_120),
    (5000, 54_000),
    (7500, 78_000),
    (10_000, 95_000),
    (12_500, 122_000),
    (15_000, 144_000),
    (17_500, 157_000),
    (20_000, 183_000),
    (25_000, 234_000),
    (27_500, 253_000),
    (30_000, 272_000),
    (35_000, 349_000),
    (40_000, 440_000),
    (50_000, 530_000),
];

const DRY_24KV: [(u32, Price); 21] = [
    (150, 23_400),
    (300, 25_380),
    (450, 28_080),
    (750, 35_190),
    (1125, 38_025),
    (1500, 40_590),
    (2250, 52_090),
    (3000, 55_800),
    (5000, 70_000),
    (7500, 100_000),
    (10_000, 120_000),
    (12_500, 159_000),
    (15_000, 194_000),
    (17_500, 210_000),
    (20_000, 237_000),
    (25_000, 314_000),
    (27_500, 315_000),
    (30_000, 343_000),
    (35_000, 429_000),
    (40_000, 540_000),
    (50_000, 680_000),
];

const DRY_36KV: [(u32, Price); 21] = [
    (150, 27_900),
    (300, 29_700),
    (450, 36_900),
    (750, 41_400),
    (1125, 46_800),
    (1500, 48_600),
    (2250, 61_380),
    (3000, 67_590),
    (5000, 90_000),
    (7500, 121_000),
    (10_000, 150_000),
    (12_500, 193_000),
    (15_000, 217_000),
    (17_500, 263_000),
    (20_000, 289_000),
    (25_000, 366_000),
    (27_500, 400_000),
    (30_000, 414_000),
    (35_000, 529_000),
    (40_000, 619_000),
    (50_000, 891_000),
];

/// Oil-immersed prices at 15kV.
const OIL_15KV: [(u32, Price); 15] = [
    (450, 12_900),
    (750, 16_000),
    (1125, 19_900),
    (1500, 22_900),
    (2250, 30_900),
    (3000, 37_600),
    (5000, 54_500),
    (7500, 68_500),
    (10_000, 89_900),
    (12_500, 117_000),
    (15_000, 135_000),
    (17_500, 140_000),
    (20_000, 180_000),
    (25_000, 220_000),
    (30_000, 265_000),
];

/// Oil voltage-class factors relative to the 15kV list.
const OIL_24KV_FACTOR: f64 = 1.10;
const OIL_36KV_FACTOR: f64 = 1.21;

static STANDARD: Lazy<Arc<PriceTable>> = Lazy::new(|| Arc::new(PriceTable::build_standard()));

/// Prices for one (type, voltage class) pair, keyed by power rating.
///
/// A derived table shares its parent's list and carries a voltage-class
/// factor. The factor is applied unrounded, so the engine can round once
/// after the last surcharge.
#[derive(Debug, Clone, PartialEq)]
pub struct VoltageTable {
    prices: BTreeMap<PowerRating, Price>,
    factor: f64,
}

impl VoltageTable {
    fn from_tenths(entries: &[(u32, Price)]) -> Self {
        entries
            .iter()
            .map(|&(tenths, price)| (PowerRating::from_tenths(tenths), price))
            .collect()
    }

    /// The same list scaled by a voltage-class factor.
    pub fn with_factor(&self, factor: f64) -> Self {
        Self {
            prices: self.prices.clone(),
            factor,
        }
    }

    /// Unrounded base price: list entry times the voltage factor.
    pub fn list_price(&self, power: PowerRating) -> Option<f64> {
        self.prices
            .get(&power)
            .map(|&price| price as f64 * self.factor)
    }

    /// Base price rounded to whole currency units, as displayed.
    pub fn get(&self, power: PowerRating) -> Option<Price> {
        self.list_price(power).map(|price| price.round() as Price)
    }

    /// Ratings available in this table, ascending.
    pub fn ratings(&self) -> impl Iterator<Item = PowerRating> + '_ {
        self.prices.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl Default for VoltageTable {
    fn default() -> Self {
        Self {
            prices: BTreeMap::new(),
            factor: 1.0,
        }
    }
}

impl FromIterator<(PowerRating, Price)> for VoltageTable {
    fn from_iter<I: IntoIterator<Item = (PowerRating, Price)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().collect(),
            factor: 1.0,
        }
    }
}

/// The authoritative base price table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    tables: BTreeMap<TransformerKind, BTreeMap<InputVoltage, VoltageTable>>,
}

impl PriceTable {
    /// The catalogue the kiosk ships with.
    pub fn standard() -> Arc<PriceTable> {
        Arc::clone(&STANDARD)
    }

    fn build_standard() -> Self {
        let oil_15 = VoltageTable::from_tenths(&OIL_15KV);

        Self::default()
            .with_table(TransformerKind::Dry, InputVoltage::Kv15, VoltageTable::from_tenths(&DRY_15KV))
            .with_table(TransformerKind::Dry, InputVoltage::Kv24, VoltageTable::from_tenths(&DRY_24KV))
            .with_table(TransformerKind::Dry, InputVoltage::Kv36, VoltageTable::from_tenths(&DRY_36KV))
            .with_table(TransformerKind::Oil, InputVoltage::Kv24, oil_15.with_factor(OIL_24KV_FACTOR))
            .with_table(TransformerKind::Oil, InputVoltage::Kv36, oil_15.with_factor(OIL_36KV_FACTOR))
            .with_table(TransformerKind::Oil, InputVoltage::Kv15, oil_15)
    }

    /// Adds or replaces the table for a (type, voltage) pair.
    pub fn with_table(
        mut self,
        kind: TransformerKind,
        voltage: InputVoltage,
        table: VoltageTable,
    ) -> Self {
        self.tables.entry(kind).or_default().insert(voltage, table);
        self
    }

    /// The table for a (type, voltage) pair, if the catalogue has one.
    pub fn table(&self, kind: TransformerKind, voltage: InputVoltage) -> Option<&VoltageTable> {
        self.tables.get(&kind).and_then(|by_voltage| by_voltage.get(&voltage))
    }

    /// Unrounded base price; `None` when the combination is not catalogued.
    pub fn list_price(
        &self,
        kind: TransformerKind,
        voltage: InputVoltage,
        power: PowerRating,
    ) -> Option<f64> {
        self.table(kind, voltage).and_then(|table| table.list_price(power))
    }

    /// Rounded base price lookup; `None` when the combination is not catalogued.
    pub fn lookup(
        &self,
        kind: TransformerKind,
        voltage: InputVoltage,
        power: PowerRating,
    ) -> Option<Price> {
        self.table(kind, voltage).and_then(|table| table.get(power))
    }
}
