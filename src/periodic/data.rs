/* ************************************************************************ **
** This file is part of matdesc, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Reference data for elements 1 through 103.
//!
//! Masses are CIAAW standard atomic weights, electronegativities are the
//! Pauling scale, covalent radii are Cordero (2008), ionic radii are Shannon
//! effective radii (CN 6 where tabulated), melting points are CRC values.
//! `NAN` marks a quantity with no tabulated value.

use ::std::f64::NAN;

pub(crate) struct ElementRecord {
    pub symbol: &'static str,
    pub atomic_mass: f64,
    pub electronegativity: f64,
    pub covalent_radius: f64,
    pub melting_point: f64,
}

pub(crate) const ELEMENTS: [ElementRecord; 103] = [
    ElementRecord { symbol: "H",  atomic_mass: 1.008, electronegativity: 2.2, covalent_radius: 0.31, melting_point: 13.99 },
    ElementRecord { symbol: "He", atomic_mass: 4.0026, electronegativity: NAN, covalent_radius: 0.28, melting_point: 0.95 },
    ElementRecord { symbol: "Li", atomic_mass: 6.94, electronegativity: 0.98, covalent_radius: 1.28, melting_point: 453.65 },
    ElementRecord { symbol: "Be", atomic_mass: 9.0122, electronegativity: 1.57, covalent_radius: 0.96, melting_point: 1560.0 },
    ElementRecord { symbol: "B",  atomic_mass: 10.81, electronegativity: 2.04, covalent_radius: 0.84, melting_point: 2349.0 },
    ElementRecord { symbol: "C",  atomic_mass: 12.011, electronegativity: 2.55, covalent_radius: 0.76, melting_point: 3823.0 },
    ElementRecord { symbol: "N",  atomic_mass: 14.007, electronegativity: 3.04, covalent_radius: 0.71, melting_point: 63.15 },
    ElementRecord { symbol: "O",  atomic_mass: 15.999, electronegativity: 3.44, covalent_radius: 0.66, melting_point: 54.36 },
    ElementRecord { symbol: "F",  atomic_mass: 18.998, electronegativity: 3.98, covalent_radius: 0.57, melting_point: 53.48 },
    ElementRecord { symbol: "Ne", atomic_mass: 20.18, electronegativity: NAN, covalent_radius: 0.58, melting_point: 24.56 },
    ElementRecord { symbol: "Na", atomic_mass: 22.99, electronegativity: 0.93, covalent_radius: 1.66, melting_point: 370.94 },
    ElementRecord { symbol: "Mg", atomic_mass: 24.305, electronegativity: 1.31, covalent_radius: 1.41, melting_point: 923.0 },
    ElementRecord { symbol: "Al", atomic_mass: 26.982, electronegativity: 1.61, covalent_radius: 1.21, melting_point: 933.47 },
    ElementRecord { symbol: "Si", atomic_mass: 28.085, electronegativity: 1.9, covalent_radius: 1.11, melting_point: 1687.0 },
    ElementRecord { symbol: "P",  atomic_mass: 30.974, electronegativity: 2.19, covalent_radius: 1.07, melting_point: 317.3 },
    ElementRecord { symbol: "S",  atomic_mass: 32.06, electronegativity: 2.58, covalent_radius: 1.05, melting_point: 388.36 },
    ElementRecord { symbol: "Cl", atomic_mass: 35.45, electronegativity: 3.16, covalent_radius: 1.02, melting_point: 171.6 },
    ElementRecord { symbol: "Ar", atomic_mass: 39.948, electronegativity: NAN, covalent_radius: 1.06, melting_point: 83.81 },
    ElementRecord { symbol: "K",  atomic_mass: 39.098, electronegativity: 0.82, covalent_radius: 2.03, melting_point: 336.7 },
    ElementRecord { symbol: "Ca", atomic_mass: 40.078, electronegativity: 1.0, covalent_radius: 1.76, melting_point: 1115.0 },
    ElementRecord { symbol: "Sc", atomic_mass: 44.956, electronegativity: 1.36, covalent_radius: 1.7, melting_point: 1814.0 },
    ElementRecord { symbol: "Ti", atomic_mass: 47.867, electronegativity: 1.54, covalent_radius: 1.6, melting_point: 1941.0 },
    ElementRecord { symbol: "V",  atomic_mass: 50.942, electronegativity: 1.63, covalent_radius: 1.53, melting_point: 2183.0 },
    ElementRecord { symbol: "Cr", atomic_mass: 51.996, electronegativity: 1.66, covalent_radius: 1.39, melting_point: 2180.0 },
    ElementRecord { symbol: "Mn", atomic_mass: 54.938, electronegativity: 1.55, covalent_radius: 1.39, melting_point: 1519.0 },
    ElementRecord { symbol: "Fe", atomic_mass: 55.845, electronegativity: 1.83, covalent_radius: 1.32, melting_point: 1811.0 },
    ElementRecord { symbol: "Co", atomic_mass: 58.933, electronegativity: 1.88, covalent_radius: 1.26, melting_point: 1768.0 },
    ElementRecord { symbol: "Ni", atomic_mass: 58.693, electronegativity: 1.91, covalent_radius: 1.24, melting_point: 1728.0 },
    ElementRecord { symbol: "Cu", atomic_mass: 63.546, electronegativity: 1.9, covalent_radius: 1.32, melting_point: 1357.77 },
    ElementRecord { symbol: "Zn", atomic_mass: 65.38, electronegativity: 1.65, covalent_radius: 1.22, melting_point: 692.68 },
    ElementRecord { symbol: "Ga", atomic_mass: 69.723, electronegativity: 1.81, covalent_radius: 1.22, melting_point: 302.91 },
    ElementRecord { symbol: "Ge", atomic_mass: 72.63, electronegativity: 2.01, covalent_radius: 1.2, melting_point: 1211.4 },
    ElementRecord { symbol: "As", atomic_mass: 74.922, electronegativity: 2.18, covalent_radius: 1.19, melting_point: 1090.0 },
    ElementRecord { symbol: "Se", atomic_mass: 78.971, electronegativity: 2.55, covalent_radius: 1.2, melting_point: 494.0 },
    ElementRecord { symbol: "Br", atomic_mass: 79.904, electronegativity: 2.96, covalent_radius: 1.2, melting_point: 265.8 },
    ElementRecord { symbol: "Kr", atomic_mass: 83.798, electronegativity: 3.0, covalent_radius: 1.16, melting_point: 115.78 },
    ElementRecord { symbol: "Rb", atomic_mass: 85.468, electronegativity: 0.82, covalent_radius: 2.2, melting_point: 312.45 },
    ElementRecord { symbol: "Sr", atomic_mass: 87.62, electronegativity: 0.95, covalent_radius: 1.95, melting_point: 1050.0 },
    ElementRecord { symbol: "Y",  atomic_mass: 88.906, electronegativity: 1.22, covalent_radius: 1.9, melting_point: 1799.0 },
    ElementRecord { symbol: "Zr", atomic_mass: 91.224, electronegativity: 1.33, covalent_radius: 1.75, melting_point: 2128.0 },
    ElementRecord { symbol: "Nb", atomic_mass: 92.906, electronegativity: 1.6, covalent_radius: 1.64, melting_point: 2750.0 },
    ElementRecord { symbol: "Mo", atomic_mass: 95.95, electronegativity: 2.16, covalent_radius: 1.54, melting_point: 2896.0 },
    ElementRecord { symbol: "Tc", atomic_mass: 98.0, electronegativity: 1.9, covalent_radius: 1.47, melting_point: 2430.0 },
    ElementRecord { symbol: "Ru", atomic_mass: 101.07, electronegativity: 2.2, covalent_radius: 1.46, melting_point: 2607.0 },
    ElementRecord { symbol: "Rh", atomic_mass: 102.91, electronegativity: 2.28, covalent_radius: 1.42, melting_point: 2237.0 },
    ElementRecord { symbol: "Pd", atomic_mass: 106.42, electronegativity: 2.2, covalent_radius: 1.39, melting_point: 1828.05 },
    ElementRecord { symbol: "Ag", atomic_mass: 107.87, electronegativity: 1.93, covalent_radius: 1.45, melting_point: 1234.93 },
    ElementRecord { symbol: "Cd", atomic_mass: 112.41, electronegativity: 1.69, covalent_radius: 1.44, melting_point: 594.22 },
    ElementRecord { symbol: "In", atomic_mass: 114.82, electronegativity: 1.78, covalent_radius: 1.42, melting_point: 429.75 },
    ElementRecord { symbol: "Sn", atomic_mass: 118.71, electronegativity: 1.96, covalent_radius: 1.39, melting_point: 505.08 },
    ElementRecord { symbol: "Sb", atomic_mass: 121.76, electronegativity: 2.05, covalent_radius: 1.39, melting_point: 903.78 },
    ElementRecord { symbol: "Te", atomic_mass: 127.6, electronegativity: 2.1, covalent_radius: 1.38, melting_point: 722.66 },
    ElementRecord { symbol: "I",  atomic_mass: 126.9, electronegativity: 2.66, covalent_radius: 1.39, melting_point: 386.85 },
    ElementRecord { symbol: "Xe", atomic_mass: 131.29, electronegativity: 2.6, covalent_radius: 1.4, melting_point: 161.4 },
    ElementRecord { symbol: "Cs", atomic_mass: 132.91, electronegativity: 0.79, covalent_radius: 2.44, melting_point: 301.59 },
    ElementRecord { symbol: "Ba", atomic_mass: 137.33, electronegativity: 0.89, covalent_radius: 2.15, melting_point: 1000.0 },
    ElementRecord { symbol: "La", atomic_mass: 138.91, electronegativity: 1.1, covalent_radius: 2.07, melting_point: 1193.0 },
    ElementRecord { symbol: "Ce", atomic_mass: 140.12, electronegativity: 1.12, covalent_radius: 2.04, melting_point: 1068.0 },
    ElementRecord { symbol: "Pr", atomic_mass: 140.91, electronegativity: 1.13, covalent_radius: 2.03, melting_point: 1208.0 },
    ElementRecord { symbol: "Nd", atomic_mass: 144.24, electronegativity: 1.14, covalent_radius: 2.01, melting_point: 1297.0 },
    ElementRecord { symbol: "Pm", atomic_mass: 145.0, electronegativity: 1.13, covalent_radius: 1.99, melting_point: 1315.0 },
    ElementRecord { symbol: "Sm", atomic_mass: 150.36, electronegativity: 1.17, covalent_radius: 1.98, melting_point: 1345.0 },
    ElementRecord { symbol: "Eu", atomic_mass: 151.96, electronegativity: 1.2, covalent_radius: 1.98, melting_point: 1099.0 },
    ElementRecord { symbol: "Gd", atomic_mass: 157.25, electronegativity: 1.2, covalent_radius: 1.96, melting_point: 1585.0 },
    ElementRecord { symbol: "Tb", atomic_mass: 158.93, electronegativity: 1.2, covalent_radius: 1.94, melting_point: 1629.0 },
    ElementRecord { symbol: "Dy", atomic_mass: 162.5, electronegativity: 1.22, covalent_radius: 1.92, melting_point: 1680.0 },
    ElementRecord { symbol: "Ho", atomic_mass: 164.93, electronegativity: 1.23, covalent_radius: 1.92, melting_point: 1734.0 },
    ElementRecord { symbol: "Er", atomic_mass: 167.26, electronegativity: 1.24, covalent_radius: 1.89, melting_point: 1802.0 },
    ElementRecord { symbol: "Tm", atomic_mass: 168.93, electronegativity: 1.25, covalent_radius: 1.9, melting_point: 1818.0 },
    ElementRecord { symbol: "Yb", atomic_mass: 173.05, electronegativity: 1.1, covalent_radius: 1.87, melting_point: 1097.0 },
    ElementRecord { symbol: "Lu", atomic_mass: 174.97, electronegativity: 1.27, covalent_radius: 1.87, melting_point: 1925.0 },
    ElementRecord { symbol: "Hf", atomic_mass: 178.49, electronegativity: 1.3, covalent_radius: 1.75, melting_point: 2506.0 },
    ElementRecord { symbol: "Ta", atomic_mass: 180.95, electronegativity: 1.5, covalent_radius: 1.7, melting_point: 3290.0 },
    ElementRecord { symbol: "W",  atomic_mass: 183.84, electronegativity: 2.36, covalent_radius: 1.62, melting_point: 3695.0 },
    ElementRecord { symbol: "Re", atomic_mass: 186.21, electronegativity: 1.9, covalent_radius: 1.51, melting_point: 3459.0 },
    ElementRecord { symbol: "Os", atomic_mass: 190.23, electronegativity: 2.2, covalent_radius: 1.44, melting_point: 3306.0 },
    ElementRecord { symbol: "Ir", atomic_mass: 192.22, electronegativity: 2.2, covalent_radius: 1.41, melting_point: 2719.0 },
    ElementRecord { symbol: "Pt", atomic_mass: 195.08, electronegativity: 2.28, covalent_radius: 1.36, melting_point: 2041.4 },
    ElementRecord { symbol: "Au", atomic_mass: 196.97, electronegativity: 2.54, covalent_radius: 1.36, melting_point: 1337.33 },
    ElementRecord { symbol: "Hg", atomic_mass: 200.59, electronegativity: 2.0, covalent_radius: 1.32, melting_point: 234.32 },
    ElementRecord { symbol: "Tl", atomic_mass: 204.38, electronegativity: 1.62, covalent_radius: 1.45, melting_point: 577.0 },
    ElementRecord { symbol: "Pb", atomic_mass: 207.2, electronegativity: 2.33, covalent_radius: 1.46, melting_point: 600.61 },
    ElementRecord { symbol: "Bi", atomic_mass: 208.98, electronegativity: 2.02, covalent_radius: 1.48, melting_point: 544.55 },
    ElementRecord { symbol: "Po", atomic_mass: 209.0, electronegativity: 2.0, covalent_radius: 1.4, melting_point: 527.0 },
    ElementRecord { symbol: "At", atomic_mass: 210.0, electronegativity: 2.2, covalent_radius: 1.5, melting_point: 575.0 },
    ElementRecord { symbol: "Rn", atomic_mass: 222.0, electronegativity: 2.2, covalent_radius: 1.5, melting_point: 202.0 },
    ElementRecord { symbol: "Fr", atomic_mass: 223.0, electronegativity: 0.7, covalent_radius: 2.6, melting_point: 300.0 },
    ElementRecord { symbol: "Ra", atomic_mass: 226.0, electronegativity: 0.9, covalent_radius: 2.21, melting_point: 973.0 },
    ElementRecord { symbol: "Ac", atomic_mass: 227.0, electronegativity: 1.1, covalent_radius: 2.15, melting_point: 1323.0 },
    ElementRecord { symbol: "Th", atomic_mass: 232.04, electronegativity: 1.3, covalent_radius: 2.06, melting_point: 2115.0 },
    ElementRecord { symbol: "Pa", atomic_mass: 231.04, electronegativity: 1.5, covalent_radius: 2.0, melting_point: 1841.0 },
    ElementRecord { symbol: "U",  atomic_mass: 238.03, electronegativity: 1.38, covalent_radius: 1.96, melting_point: 1405.3 },
    ElementRecord { symbol: "Np", atomic_mass: 237.0, electronegativity: 1.36, covalent_radius: 1.9, melting_point: 917.0 },
    ElementRecord { symbol: "Pu", atomic_mass: 244.0, electronegativity: 1.28, covalent_radius: 1.87, melting_point: 912.5 },
    ElementRecord { symbol: "Am", atomic_mass: 243.0, electronegativity: 1.3, covalent_radius: 1.8, melting_point: 1449.0 },
    ElementRecord { symbol: "Cm", atomic_mass: 247.0, electronegativity: 1.3, covalent_radius: 1.69, melting_point: 1613.0 },
    ElementRecord { symbol: "Bk", atomic_mass: 247.0, electronegativity: 1.3, covalent_radius: NAN, melting_point: 1259.0 },
    ElementRecord { symbol: "Cf", atomic_mass: 251.0, electronegativity: 1.3, covalent_radius: NAN, melting_point: 1173.0 },
    ElementRecord { symbol: "Es", atomic_mass: 252.0, electronegativity: 1.3, covalent_radius: NAN, melting_point: 1133.0 },
    ElementRecord { symbol: "Fm", atomic_mass: 257.0, electronegativity: 1.3, covalent_radius: NAN, melting_point: NAN },
    ElementRecord { symbol: "Md", atomic_mass: 258.0, electronegativity: 1.3, covalent_radius: NAN, melting_point: NAN },
    ElementRecord { symbol: "No", atomic_mass: 259.0, electronegativity: 1.3, covalent_radius: NAN, melting_point: NAN },
    ElementRecord { symbol: "Lr", atomic_mass: 262.0, electronegativity: NAN, covalent_radius: NAN, melting_point: NAN },
];

// (atomic number, [(charge, radius in angstroms)]), sorted by atomic number
pub(crate) const IONIC_RADII: &[(u8, &[(i32, f64)])] = &[
    (3, &[(1, 0.76)]),
    (4, &[(2, 0.45)]),
    (5, &[(3, 0.27)]),
    (6, &[(4, 0.16)]),
    (7, &[(-3, 1.46), (5, 0.13)]),
    (8, &[(-2, 1.4)]),
    (9, &[(-1, 1.33)]),
    (11, &[(1, 1.02)]),
    (12, &[(2, 0.72)]),
    (13, &[(3, 0.535)]),
    (14, &[(4, 0.4)]),
    (15, &[(-3, 2.12), (5, 0.38)]),
    (16, &[(-2, 1.84), (6, 0.29)]),
    (17, &[(-1, 1.81), (7, 0.27)]),
    (19, &[(1, 1.38)]),
    (20, &[(2, 1.0)]),
    (21, &[(3, 0.745)]),
    (22, &[(2, 0.86), (3, 0.67), (4, 0.605)]),
    (23, &[(2, 0.79), (3, 0.64), (4, 0.58), (5, 0.54)]),
    (24, &[(2, 0.8), (3, 0.615), (6, 0.44)]),
    (25, &[(2, 0.83), (3, 0.645), (4, 0.53), (7, 0.46)]),
    (26, &[(2, 0.78), (3, 0.645)]),
    (27, &[(2, 0.745), (3, 0.61)]),
    (28, &[(2, 0.69)]),
    (29, &[(1, 0.77), (2, 0.73)]),
    (30, &[(2, 0.74)]),
    (31, &[(3, 0.62)]),
    (32, &[(2, 0.73), (4, 0.53)]),
    (33, &[(3, 0.58), (5, 0.46)]),
    (34, &[(-2, 1.98), (4, 0.5), (6, 0.42)]),
    (35, &[(-1, 1.96)]),
    (37, &[(1, 1.52)]),
    (38, &[(2, 1.18)]),
    (39, &[(3, 0.9)]),
    (40, &[(4, 0.72)]),
    (41, &[(5, 0.64)]),
    (42, &[(4, 0.65), (6, 0.59)]),
    (43, &[(4, 0.645)]),
    (44, &[(3, 0.68), (4, 0.62)]),
    (45, &[(3, 0.665)]),
    (46, &[(2, 0.86)]),
    (47, &[(1, 1.15)]),
    (48, &[(2, 0.95)]),
    (49, &[(3, 0.8)]),
    (50, &[(2, 1.18), (4, 0.69)]),
    (51, &[(3, 0.76), (5, 0.6)]),
    (52, &[(-2, 2.21), (4, 0.97), (6, 0.56)]),
    (53, &[(-1, 2.2), (5, 0.95)]),
    (55, &[(1, 1.67)]),
    (56, &[(2, 1.35)]),
    (57, &[(3, 1.032)]),
    (58, &[(3, 1.01), (4, 0.87)]),
    (59, &[(3, 0.99)]),
    (60, &[(3, 0.983)]),
    (61, &[(3, 0.97)]),
    (62, &[(3, 0.958)]),
    (63, &[(2, 1.17), (3, 0.947)]),
    (64, &[(3, 0.938)]),
    (65, &[(3, 0.923), (4, 0.76)]),
    (66, &[(3, 0.912)]),
    (67, &[(3, 0.901)]),
    (68, &[(3, 0.89)]),
    (69, &[(3, 0.88)]),
    (70, &[(2, 1.02), (3, 0.868)]),
    (71, &[(3, 0.861)]),
    (72, &[(4, 0.71)]),
    (73, &[(5, 0.64)]),
    (74, &[(4, 0.66), (6, 0.6)]),
    (75, &[(4, 0.63), (7, 0.53)]),
    (76, &[(4, 0.63)]),
    (77, &[(3, 0.68), (4, 0.625)]),
    (78, &[(2, 0.8), (4, 0.625)]),
    (79, &[(1, 1.37), (3, 0.85)]),
    (80, &[(1, 1.19), (2, 1.02)]),
    (81, &[(1, 1.5), (3, 0.885)]),
    (82, &[(2, 1.19), (4, 0.775)]),
    (83, &[(3, 1.03), (5, 0.76)]),
    (84, &[(4, 0.94)]),
    (87, &[(1, 1.8)]),
    (88, &[(2, 1.48)]),
    (89, &[(3, 1.12)]),
    (90, &[(4, 0.94)]),
    (91, &[(5, 0.78)]),
    (92, &[(4, 0.89), (6, 0.73)]),
    (93, &[(5, 0.75)]),
    (94, &[(4, 0.86)]),
    (95, &[(3, 0.975)]),
    (96, &[(3, 0.97)]),
];

// (atomic number, common oxidation states), sorted by atomic number
pub(crate) const OXIDATION_STATES: &[(u8, &[i32])] = &[
    (1, &[-1, 1]),
    (3, &[1]),
    (4, &[2]),
    (5, &[3]),
    (6, &[-4, 2, 4]),
    (7, &[-3, 3, 5]),
    (8, &[-2]),
    (9, &[-1]),
    (11, &[1]),
    (12, &[2]),
    (13, &[3]),
    (14, &[-4, 4]),
    (15, &[-3, 3, 5]),
    (16, &[-2, 4, 6]),
    (17, &[-1, 1, 5, 7]),
    (19, &[1]),
    (20, &[2]),
    (21, &[3]),
    (22, &[2, 3, 4]),
    (23, &[2, 3, 4, 5]),
    (24, &[2, 3, 6]),
    (25, &[2, 3, 4, 6, 7]),
    (26, &[2, 3]),
    (27, &[2, 3]),
    (28, &[2]),
    (29, &[1, 2]),
    (30, &[2]),
    (31, &[3]),
    (32, &[-4, 2, 4]),
    (33, &[-3, 3, 5]),
    (34, &[-2, 4, 6]),
    (35, &[-1, 1, 5]),
    (36, &[2]),
    (37, &[1]),
    (38, &[2]),
    (39, &[3]),
    (40, &[4]),
    (41, &[5]),
    (42, &[4, 6]),
    (43, &[4, 7]),
    (44, &[3, 4]),
    (45, &[3]),
    (46, &[2, 4]),
    (47, &[1]),
    (48, &[2]),
    (49, &[3]),
    (50, &[-4, 2, 4]),
    (51, &[-3, 3, 5]),
    (52, &[-2, 4, 6]),
    (53, &[-1, 1, 5, 7]),
    (54, &[2, 4, 6]),
    (55, &[1]),
    (56, &[2]),
    (57, &[3]),
    (58, &[3, 4]),
    (59, &[3]),
    (60, &[3]),
    (61, &[3]),
    (62, &[2, 3]),
    (63, &[2, 3]),
    (64, &[3]),
    (65, &[3, 4]),
    (66, &[3]),
    (67, &[3]),
    (68, &[3]),
    (69, &[3]),
    (70, &[2, 3]),
    (71, &[3]),
    (72, &[4]),
    (73, &[5]),
    (74, &[4, 6]),
    (75, &[4, 7]),
    (76, &[4]),
    (77, &[3, 4]),
    (78, &[2, 4]),
    (79, &[1, 3]),
    (80, &[1, 2]),
    (81, &[1, 3]),
    (82, &[2, 4]),
    (83, &[3, 5]),
    (84, &[-2, 2, 4]),
    (85, &[-1, 1]),
    (86, &[2]),
    (87, &[1]),
    (88, &[2]),
    (89, &[3]),
    (90, &[4]),
    (91, &[5]),
    (92, &[4, 6]),
    (93, &[5]),
    (94, &[4]),
    (95, &[3]),
    (96, &[3]),
    (97, &[3]),
    (98, &[3]),
    (99, &[3]),
    (100, &[3]),
    (101, &[3]),
    (102, &[2, 3]),
    (103, &[3]),
];
