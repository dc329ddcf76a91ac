//! Regional housing prices and market snapshot.

use serde::{Deserialize, Serialize};

use crate::error::{MortgageError, MortgageResult};

/// A housing market area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    /// EUR per square metre
    pub average_price: f64,
    /// Percent per year
    pub price_growth: f64,
    /// (latitude, longitude)
    pub coordinates: (f64, f64),
}

/// Known regions, in presentation order.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRegistry {
    regions: Vec<Region>,
}

fn region(id: &str, name: &str, average_price: f64, price_growth: f64, lat: f64, lng: f64) -> Region {
    Region {
        id: id.into(),
        name: name.into(),
        average_price,
        price_growth,
        coordinates: (lat, lng),
    }
}

impl RegionRegistry {
    /// Riga districts and the larger Latvian towns.
    pub fn latvian() -> Self {
        Self {
            regions: vec![
                region("riga-center", "Rīga - Centrs", 2800.0, 5.2, 56.9496, 24.1052),
                region("riga-jugla", "Rīga - Jugla", 1800.0, 6.1, 57.0234, 24.1654),
                region("riga-kengarags", "Rīga - Ķengarags", 1600.0, 4.8, 56.9123, 24.1567),
                region("jurmala", "Jūrmala", 2200.0, 3.9, 56.9681, 23.7794),
                region("liepaja", "Liepāja", 1200.0, 2.1, 56.5046, 21.0111),
                region("daugavpils", "Daugavpils", 800.0, 1.8, 55.8745, 26.5065),
                region("ventspils", "Ventspils", 1100.0, 2.5, 57.3886, 21.5644),
                region("rezekne", "Rēzekne", 700.0, 1.2, 56.5096, 27.3341),
            ],
        }
    }

    pub fn all(&self) -> &[Region] {
        &self.regions
    }

    pub fn get(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Price of a property of `area_m2` at the region's average rate.
    pub fn estimate_price(&self, region_id: &str, area_m2: f64) -> MortgageResult<f64> {
        let region = self
            .get(region_id)
            .ok_or_else(|| MortgageError::UnknownRegion(region_id.to_string()))?;
        if !area_m2.is_finite() || area_m2 <= 0.0 {
            return Err(MortgageError::InvalidInput(format!(
                "area must be positive, got {}",
                area_m2
            )));
        }
        Ok(region.average_price * area_m2)
    }
}

impl Default for RegionRegistry {
    fn default() -> Self {
        Self::latvian()
    }
}

/// Country-wide market snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketTrends {
    /// Percent this year
    pub average_price_change: f64,
    /// Number of transactions this year
    pub transaction_volume: u32,
    /// Percent predicted for next year
    pub forecast_next_year: f64,
    pub hot_areas: Vec<String>,
}

/// Static snapshot; there is no live market feed.
pub fn market_trends() -> MarketTrends {
    MarketTrends {
        average_price_change: 4.2,
        transaction_volume: 15_600,
        forecast_next_year: 3.8,
        hot_areas: vec![
            "Rīga - Centrs".into(),
            "Jūrmala".into(),
            "Rīga - Jugla".into(),
        ],
    }
}
