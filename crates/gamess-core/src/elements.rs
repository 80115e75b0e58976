//! Element symbol to atomic number lookup.
//!
//! Symbols are matched exactly as written in the geometry file. Elements 113,
//! 115, 117 and 118 use the systematic names (`Uut`, `Uup`, `Uus`, `Uuo`).

pub const MAX_ATOMIC_NUMBER: u32 = 118;

/// Atomic number reported for symbols missing from the table.
pub const UNKNOWN_ATOMIC_NUMBER: u32 = 0;

const ELEMENT_SYMBOLS: [&str; MAX_ATOMIC_NUMBER as usize] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Uut",
    "Fl", "Uup", "Lv", "Uus", "Uuo",
];

/// Returns the atomic number for `symbol`, or [`UNKNOWN_ATOMIC_NUMBER`].
pub fn atomic_number(symbol: &str) -> u32 {
    ELEMENT_SYMBOLS
        .iter()
        .position(|candidate| *candidate == symbol)
        .map_or(UNKNOWN_ATOMIC_NUMBER, |index| index as u32 + 1)
}

pub fn is_known_symbol(symbol: &str) -> bool {
    atomic_number(symbol) != UNKNOWN_ATOMIC_NUMBER
}

pub fn element_symbol(atomic_number: u32) -> Option<&'static str> {
    if atomic_number == 0 || atomic_number > MAX_ATOMIC_NUMBER {
        return None;
    }
    Some(ELEMENT_SYMBOLS[atomic_number as usize - 1])
}
