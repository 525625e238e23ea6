//! Static figures for the overview page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    /// Percent change versus the previous period.
    pub change: f64,
    pub trend: Trend,
    /// CSS custom property for the card background.
    pub background: &'static str,
    pub link: Option<&'static str>,
}

pub const METRICS: [Metric; 4] = [
    Metric {
        label: "Customers",
        value: "3,781",
        change: 11.01,
        trend: Trend::Up,
        background: "var(--metric-card-1)",
        link: None,
    },
    Metric {
        label: "Orders",
        value: "1,219",
        change: -0.03,
        trend: Trend::Down,
        background: "var(--metric-card-2)",
        link: Some("/dashboard/order-list"),
    },
    Metric {
        label: "Revenue",
        value: "$695",
        change: 15.03,
        trend: Trend::Up,
        background: "var(--metric-card-3)",
        link: None,
    },
    Metric {
        label: "Growth",
        value: "30.1%",
        change: 6.08,
        trend: Trend::Up,
        background: "var(--metric-card-4)",
        link: None,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevenuePoint {
    pub label: &'static str,
    pub current: f64,
    pub previous: f64,
}

pub const REVENUE: [RevenuePoint; 6] = [
    RevenuePoint { label: "Jan", current: 10_000.0, previous: 15_000.0 },
    RevenuePoint { label: "Feb", current: 25_000.0, previous: 20_000.0 },
    RevenuePoint { label: "Mar", current: 18_000.0, previous: 25_000.0 },
    RevenuePoint { label: "Apr", current: 22_000.0, previous: 18_000.0 },
    RevenuePoint { label: "May", current: 28_000.0, previous: 22_000.0 },
    RevenuePoint { label: "Jun", current: 30_000.0, previous: 28_000.0 },
];

pub const REVENUE_AXIS_MAX: f64 = 30_000.0;
pub const CURRENT_WEEK_REVENUE: &str = "$58,211";
pub const PREVIOUS_WEEK_REVENUE: &str = "$68,768";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub label: &'static str,
    pub projection: f64,
    pub actual: f64,
}

pub const PROJECTIONS: [Projection; 6] = [
    Projection { label: "Jan", projection: 15.0, actual: 5.0 },
    Projection { label: "Feb", projection: 20.0, actual: 5.0 },
    Projection { label: "Mar", projection: 17.0, actual: 4.0 },
    Projection { label: "Apr", projection: 22.0, actual: 6.0 },
    Projection { label: "May", projection: 15.0, actual: 3.0 },
    Projection { label: "Jun", projection: 20.0, actual: 5.0 },
];

pub const PROJECTIONS_AXIS_MAX: f64 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub price: f64,
    pub quantity: u32,
    pub amount: f64,
}

pub const TOP_PRODUCTS: [Product; 5] = [
    Product { name: "ASOS Ridley High Waist", price: 79.49, quantity: 82, amount: 6_518.18 },
    Product { name: "Marco Lightweight Shirt", price: 128.5, quantity: 37, amount: 4_754.5 },
    Product { name: "Half Sleeve Shirt", price: 39.99, quantity: 64, amount: 2_559.36 },
    Product { name: "Lightweight Jacket", price: 20.0, quantity: 184, amount: 3_680.0 },
    Product { name: "Marco Shoes", price: 79.49, quantity: 64, amount: 1_965.81 },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocationRevenue {
    pub city: &'static str,
    pub label: &'static str,
    /// Thousands, for bar lengths.
    pub value: f64,
}

pub const REVENUE_BY_LOCATION: [LocationRevenue; 4] = [
    LocationRevenue { city: "New York", label: "72K", value: 72.0 },
    LocationRevenue { city: "San Francisco", label: "39K", value: 39.0 },
    LocationRevenue { city: "Sydney", label: "25K", value: 25.0 },
    LocationRevenue { city: "Singapore", label: "61K", value: 61.0 },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SalesChannel {
    pub channel: &'static str,
    pub value: f64,
    pub color: &'static str,
    pub dark_color: &'static str,
}

pub const TOTAL_SALES: [SalesChannel; 4] = [
    SalesChannel { channel: "Direct", value: 300.56, color: "#1C1C1C", dark_color: "#C6C7F8" },
    SalesChannel { channel: "Affiliate", value: 135.18, color: "#B1E3FF", dark_color: "#B1E3FF" },
    SalesChannel { channel: "Sponsored", value: 154.02, color: "#BAEDBD", dark_color: "#BAEDBD" },
    SalesChannel { channel: "E-mail", value: 48.96, color: "#95A4FC", dark_color: "#95A4FC" },
];

/// `"$1,234.56"` with thousands separators.
#[must_use]
pub fn format_currency(value: f64) -> String {
    let cents = format!("{:.2}", value.abs());
    let (whole, fraction) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_formatting() {
        assert_eq!(format_currency(6_518.18), "$6,518.18");
        assert_eq!(format_currency(20.0), "$20.00");
        assert_eq!(format_currency(1_234_567.5), "$1,234,567.50");
        assert_eq!(format_currency(-48.96), "-$48.96");
    }

    #[test]
    fn only_orders_metric_links() {
        let linked = METRICS.iter().filter_map(|m| m.link).collect::<Vec<_>>();
        assert_eq!(linked, vec!["/dashboard/order-list"]);
    }
}
