/// Mileage/price observations as parallel columns, paired by index.
#[derive(Clone, Debug, Default)]
pub struct SampleSet {
    pub km: Vec<f64>,
    pub price: Vec<f64>,
}

impl SampleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        let mut samples = Self::new();
        for &(km, price) in pairs {
            samples.push(km, price);
        }
        samples
    }

    pub fn push(&mut self, km: f64, price: f64) {
        self.km.push(km);
        self.price.push(price);
    }

    pub fn len(&self) -> usize {
        self.km.len()
    }

    pub fn is_empty(&self) -> bool {
        self.km.is_empty()
    }

    /// Smallest and largest mileage, None for an empty set.
    pub fn km_range(&self) -> Option<(f64, f64)> {
        if self.km.is_empty() {
            return None;
        }
        let lo = self.km.iter().cloned().filter(|v| !v.is_nan()).fold(f64::INFINITY, f64::min);
        let hi = self.km.iter().cloned().filter(|v| !v.is_nan()).fold(f64::NEG_INFINITY, f64::max);
        Some((lo, hi))
    }

    pub fn price_range(&self) -> Option<(f64, f64)> {
        if self.price.is_empty() {
            return None;
        }
        let lo = self.price.iter().cloned().filter(|v| !v.is_nan()).fold(f64::INFINITY, f64::min);
        let hi =
            self.price.iter().cloned().filter(|v| !v.is_nan()).fold(f64::NEG_INFINITY, f64::max);
        Some((lo, hi))
    }
}

#[cfg(test)]
mod tests {
    use super::SampleSet;

    #[test]
    fn test_push_keeps_columns_paired() {
        let mut samples = SampleSet::new();
        samples.push(240000., 3650.);
        samples.push(139800., 3800.);

        assert_eq!(samples.len(), 2);
        assert_eq!(samples.km[1], 139800.);
        assert_eq!(samples.price[1], 3800.);
    }

    #[test]
    fn test_km_range() {
        let samples = SampleSet::from_pairs(&[(3., 1.), (0., 2.), (28., 3.)]);

        assert_eq!(samples.km_range(), Some((0., 28.)));
    }

    #[test]
    fn test_range_empty() {
        let samples = SampleSet::new();

        assert_eq!(samples.km_range(), None);
        assert_eq!(samples.price_range(), None);
    }
}
