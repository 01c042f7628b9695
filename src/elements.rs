use std::collections::HashMap;
use std::sync::LazyLock;

// Standard atomic weights, in periodic order
const ATOMIC_WEIGHTS: &[(&str, f64)] = &[
    // Period 1
    ("H", 1.007), ("He", 4.003),
    // Period 2
    ("Li", 6.941), ("Be", 9.012), ("B", 10.81), ("C", 12.01), ("N", 14.01), ("O", 16.00),
    ("F", 19.00), ("Ne", 20.18),
    // Period 3
    ("Na", 22.99), ("Mg", 24.31), ("Al", 26.98), ("Si", 28.09), ("P", 30.98), ("S", 32.07),
    ("Cl", 35.45), ("Ar", 39.95),
    // Period 4
    ("K", 39.10), ("Ca", 40.08), ("Sc", 44.96), ("Ti", 47.87), ("V", 50.94), ("Cr", 52.00),
    ("Mn", 54.94), ("Fe", 55.85), ("Co", 58.93), ("Ni", 58.69), ("Cu", 63.54), ("Zn", 65.38),
    ("Ga", 69.72), ("Ge", 72.63), ("As", 74.92), ("Se", 78.96), ("Br", 79.90), ("Kr", 83.80),
    // Period 5
    ("Rb", 85.47), ("Sr", 87.62), ("Y", 88.90), ("Zr", 91.22), ("Nb", 92.91), ("Mo", 95.96),
    ("Tc", 97.91), ("Ru", 101.1), ("Rh", 102.9), ("Pd", 106.4), ("Ag", 107.9), ("Cd", 112.4),
    ("In", 114.8), ("Sn", 118.7), ("Sb", 121.8), ("Te", 127.6), ("I", 126.9), ("Xe", 131.3),
    // Period 6
    ("Cs", 132.9), ("Ba", 137.3), ("La", 138.9), ("Ce", 140.1), ("Pr", 140.9), ("Nd", 144.2),
    ("Pm", 145.0), ("Sm", 150.4), ("Eu", 151.9), ("Gd", 157.3), ("Tb", 158.9), ("Dy", 162.5),
    ("Ho", 164.9), ("Er", 167.3), ("Tm", 168.9), ("Yb", 173.1), ("Lu", 175.0), ("Hf", 178.5),
    ("Ta", 181.0), ("W", 183.8), ("Re", 186.2), ("Os", 190.2), ("Ir", 192.2), ("Pt", 195.1),
    ("Au", 197.0), ("Hg", 200.6), ("Tl", 204.4), ("Pb", 207.2), ("Bi", 209.0), ("Po", 209.0),
    ("At", 210.0), ("Rn", 222.0),
    // Period 7
    ("Fr", 223.0), ("Ra", 226.0), ("Ac", 227.0), ("Th", 232.0), ("Pa", 231.0), ("U", 238.0),
    ("Np", 237.0), ("Pu", 244.0), ("Am", 243.0), ("Cm", 247.0), ("Bk", 247.0), ("Cf", 251.0),
    ("Es", 252.0), ("Fm", 257.0), ("Md", 258.0), ("No", 259.0), ("Lr", 263.0), ("Rf", 261.0),
    ("Db", 262.0), ("Sg", 266.0), ("Bh", 264.0), ("Hs", 277.0), ("Mt", 268.0), ("Ds", 271.0),
    ("Rg", 272.0), ("Cn", 285.0),
];

static TABLE: LazyLock<ElementTable> = LazyLock::new(ElementTable::build);

/// Read-only lookup from element symbol to atomic weight.
///
/// Built once on first use and shared by every evaluation.
#[derive(Debug)]
pub struct ElementTable {
    weights: HashMap<&'static str, f64>,
}

impl ElementTable {
    fn build() -> Self {
        Self {
            weights: ATOMIC_WEIGHTS.iter().copied().collect(),
        }
    }

    /// The process-wide table
    pub fn global() -> &'static ElementTable {
        &TABLE
    }

    /// Atomic weight of `symbol`, case-sensitive
    pub fn weight(&self, symbol: &str) -> Option<f64> {
        self.weights.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Symbols and weights in periodic order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        ATOMIC_WEIGHTS.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        let table = ElementTable::global();
        assert_eq!(table.len(), 112);
        assert_eq!(table.iter().count(), 112);
    }

    #[test]
    fn test_symbols_are_unique_and_short() {
        let table = ElementTable::global();
        // A duplicate would shrink the map below the slice length
        assert_eq!(table.len(), ATOMIC_WEIGHTS.len());
        for (symbol, weight) in table.iter() {
            assert!((1..=2).contains(&symbol.len()), "bad symbol {}", symbol);
            assert!(symbol.chars().next().unwrap().is_ascii_uppercase());
            assert!(symbol.chars().skip(1).all(|c| c.is_ascii_lowercase()));
            assert!(weight > 0.0, "non-positive weight for {}", symbol);
        }
    }

    #[test]
    fn test_lookup() {
        let table = ElementTable::global();
        assert_eq!(table.weight("H"), Some(1.007));
        assert_eq!(table.weight("N"), Some(14.01));
        assert_eq!(table.weight("Ne"), Some(20.18));
        assert_eq!(table.weight("Au"), Some(197.0));
        assert_eq!(table.weight("Cn"), Some(285.0));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = ElementTable::global();
        assert_eq!(table.weight("co"), None);
        assert_eq!(table.weight("CO"), None);
        assert_eq!(table.weight("X"), None);
        assert_eq!(table.weight(""), None);
    }

    #[test]
    fn test_periodic_order() {
        let symbols: Vec<_> = ElementTable::global().iter().map(|(s, _)| s).take(3).collect();
        assert_eq!(symbols, vec!["H", "He", "Li"]);
    }
}
