//! The six fixed chart descriptors.
//!
//! A descriptor only says *what* to draw: chart kind, which column plays
//! which role, and the panel title. It never looks at data, so the same
//! six instances serve every session and every filter state.

use census_model::{Field, StudentRecord};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Histogram,
    Scatter,
    ParallelCategories,
    Bubble,
    GroupedBar,
}

/// The part a column plays in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    X,
    Y,
    /// Series/group for categorical columns, continuous color otherwise.
    Color,
    /// Bubble area.
    Size,
    /// One category axis of a parallel-categories chart.
    Dimension,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Encoding {
    pub role: Role,
    pub field: Field,
}

const fn enc(role: Role, field: Field) -> Encoding {
    Encoding { role, field }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScale {
    Inferno,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartOptions {
    /// Draw a rug of individual values above a histogram.
    pub marginal_rug: bool,
    /// Logarithmic x axis; non-positive x values cannot be placed.
    pub log_x: bool,
    /// Diameter in pixels of the largest bubble.
    pub size_max: Option<f64>,
    pub color_scale: Option<ColorScale>,
}

impl ChartOptions {
    const PLAIN: ChartOptions = ChartOptions {
        marginal_rug: false,
        log_x: false,
        size_max: None,
        color_scale: None,
    };
}

/// Static declaration of one chart panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartDescriptor {
    /// Position in the dashboard, 1-based.
    pub number: usize,
    pub kind: ChartKind,
    pub encodings: &'static [Encoding],
    pub title: &'static str,
    pub options: ChartOptions,
}

impl ChartDescriptor {
    /// The first column bound to `role`.
    pub fn field(&self, role: Role) -> Option<Field> {
        self.fields(role).next()
    }

    /// Every column bound to `role`, in declaration order.
    pub fn fields(&self, role: Role) -> impl Iterator<Item = Field> + '_ {
        self.encodings
            .iter()
            .filter(move |e| e.role == role)
            .map(|e| e.field)
    }

    /// Columns a record must have to appear in this chart.
    ///
    /// Axes, bubble size and category dimensions are required; a missing
    /// color column only moves the record into an unspecified group.
    pub fn required_fields(&self) -> Vec<Field> {
        self.encodings
            .iter()
            .filter(|e| !matches!(e.role, Role::Color))
            .map(|e| e.field)
            .collect()
    }

    /// True when `record` has every required column (and, on a log x
    /// axis, a positive x value).
    pub fn includes(&self, record: &StudentRecord) -> bool {
        let present = self.required_fields().into_iter().all(|field| {
            if field.is_categorical() {
                field.category(record).is_some()
            } else {
                field.number(record).is_some()
            }
        });
        if !present {
            return false;
        }
        if self.options.log_x {
            if let Some(x) = self.field(Role::X).and_then(|f| f.number(record)) {
                return x > 0.0;
            }
        }
        true
    }

    /// DOM id of the panel that shows this chart.
    pub fn container_id(&self) -> String {
        format!("census-chart-{}", self.number)
    }
}

/// Number of charts on the dashboard.
pub const CHART_COUNT: usize = 6;

/// The dashboard's charts in layout order (rows of two: 1,2 / 3,4 / 5,6).
pub const CHART_SPECS: [ChartDescriptor; CHART_COUNT] = [
    ChartDescriptor {
        number: 1,
        kind: ChartKind::Histogram,
        encodings: &[enc(Role::X, Field::Height), enc(Role::Color, Field::Gender)],
        title: "Histogram - Height by Gender",
        options: ChartOptions {
            marginal_rug: true,
            ..ChartOptions::PLAIN
        },
    },
    ChartDescriptor {
        number: 2,
        kind: ChartKind::Scatter,
        encodings: &[
            enc(Role::X, Field::HrsSpentWithFamily),
            enc(Role::Y, Field::HrsGames),
            enc(Role::Color, Field::Gender),
        ],
        title: "Scatter plot - Hours with Family vs Hours Gaming",
        options: ChartOptions::PLAIN,
    },
    ChartDescriptor {
        number: 3,
        kind: ChartKind::ParallelCategories,
        encodings: &[
            enc(Role::Dimension, Field::Gender),
            enc(Role::Dimension, Field::BirthMonth),
            enc(Role::Color, Field::AgeSurveyed),
        ],
        title: "Parallel Categories - Gender, Birth Month",
        options: ChartOptions {
            color_scale: Some(ColorScale::Inferno),
            ..ChartOptions::PLAIN
        },
    },
    ChartDescriptor {
        number: 4,
        kind: ChartKind::Bubble,
        encodings: &[
            enc(Role::X, Field::YearSurveyed),
            enc(Role::Y, Field::Armspan),
            enc(Role::Size, Field::HrsChores),
        ],
        title: "Bubble Plot - Armspan vs Chores by YearSurveyed",
        options: ChartOptions {
            log_x: true,
            size_max: Some(60.0),
            ..ChartOptions::PLAIN
        },
    },
    ChartDescriptor {
        number: 5,
        kind: ChartKind::GroupedBar,
        encodings: &[
            enc(Role::X, Field::YearSurveyed),
            enc(Role::Y, Field::HrsSocialMedia),
            enc(Role::Color, Field::Gender),
        ],
        title: "Grouped Bar - Social Media Hours by Year Surveyed",
        options: ChartOptions::PLAIN,
    },
    ChartDescriptor {
        number: 6,
        kind: ChartKind::GroupedBar,
        encodings: &[
            enc(Role::X, Field::MemoryGameScore),
            enc(Role::Y, Field::AcademicPressure),
            enc(Role::Color, Field::Gender),
        ],
        title: "Grouped Bar - Academic Pressure by Memory Game Score",
        options: ChartOptions::PLAIN,
    },
];
