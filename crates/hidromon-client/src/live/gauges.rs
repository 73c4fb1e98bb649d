use serde::Serialize;

use crate::live::parameters::LiveParameters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeKind {
    WaterLevel,
    Nutrient,
    Ph,
}

impl GaugeKind {
    pub const ALL: [GaugeKind; 3] = [Self::WaterLevel, Self::Nutrient, Self::Ph];

    pub const fn gauge(self) -> Gauge {
        match self {
            Self::WaterLevel => Gauge {
                kind: self,
                title: "Level Air",
                min: 0.0,
                max: 20.0,
            },
            Self::Nutrient => Gauge {
                kind: self,
                title: "Kadar Nutrisi",
                min: 0.0,
                max: 1400.0,
            },
            Self::Ph => Gauge {
                kind: self,
                title: "Kadar pH Air",
                min: 0.0,
                max: 14.0,
            },
        }
    }

    pub fn value_of(self, parameters: &LiveParameters) -> f64 {
        match self {
            Self::WaterLevel => parameters.water_level,
            Self::Nutrient => parameters.nutrient,
            Self::Ph => parameters.ph,
        }
    }
}

/// Safe operating band for one sensor. Both ends are inside the band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gauge {
    pub kind: GaugeKind,
    pub title: &'static str,
    pub min: f64,
    pub max: f64,
}

impl Gauge {
    pub fn is_out_of_range(&self, value: f64) -> bool {
        value < self.min || value > self.max
    }

    /// Fill fraction for the dial. Not clamped, so out-of-band readings
    /// report below 0 or above 1.
    pub fn progress(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    pub fn alert_message(&self) -> String {
        format!("{} berada di luar batas aman!", self.title)
    }

    pub fn read(&self, value: f64) -> GaugeReading {
        let alert = self.is_out_of_range(value);
        GaugeReading {
            gauge: *self,
            value,
            progress: self.progress(value),
            alert,
            message: alert.then(|| self.alert_message()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeReading {
    #[serde(flatten)]
    pub gauge: Gauge,
    pub value: f64,
    pub progress: f64,
    pub alert: bool,
    pub message: Option<String>,
}

pub fn read_all(parameters: &LiveParameters) -> Vec<GaugeReading> {
    GaugeKind::ALL
        .iter()
        .map(|kind| kind.gauge().read(kind.value_of(parameters)))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AlertFlags {
    pub water_level: bool,
    pub nutrient: bool,
    pub ph: bool,
}

impl AlertFlags {
    pub fn evaluate(parameters: &LiveParameters) -> Self {
        let check = |kind: GaugeKind| kind.gauge().is_out_of_range(kind.value_of(parameters));
        Self {
            water_level: check(GaugeKind::WaterLevel),
            nutrient: check(GaugeKind::Nutrient),
            ph: check(GaugeKind::Ph),
        }
    }

    pub fn any(&self) -> bool {
        self.water_level || self.nutrient || self.ph
    }
}
