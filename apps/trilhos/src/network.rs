//! Built-in Brazilian rail topology.
//!
//! 27 state capitals and 40 connections.  Distances are straight-line
//! kilometres between the cities, standing in for track length.

use rail_network::Topology;

/// `(name, lat, lon)` for every state capital.
pub const CITIES: &[(&str, f64, f64)] = &[
    ("São Paulo",      -23.5505, -46.6333),
    ("Rio de Janeiro", -22.9068, -43.1729),
    ("Belo Horizonte", -19.9167, -43.9345),
    ("Brasília",       -15.7797, -47.9297),
    ("Salvador",       -12.9714, -38.5014),
    ("Recife",          -8.0539, -34.8811),
    ("Fortaleza",       -3.7172, -38.5433),
    ("Belém",           -1.4558, -48.5044),
    ("Manaus",          -3.1190, -60.0217),
    ("Porto Alegre",   -30.0368, -51.2090),
    ("Curitiba",       -25.4290, -49.2671),
    ("Campo Grande",   -20.4697, -54.6201),
    ("Cuiabá",         -15.6014, -56.0979),
    ("Porto Velho",     -8.7619, -63.9004),
    ("Goiânia",        -16.6869, -49.2648),
    ("Teresina",        -5.0920, -42.8019),
    ("Natal",           -5.7945, -35.2094),
    ("João Pessoa",     -7.1195, -34.8794),
    ("Maceió",          -9.6658, -35.7353),
    ("Aracaju",        -10.9472, -37.0731),
    ("Vitória",        -20.2976, -40.2957),
    ("Florianópolis",  -27.5969, -48.5495),
    ("Rio Branco",      -9.9754, -67.8249),
    ("Boa Vista",        2.8235, -60.6758),
    ("São Luis",        -2.5391, -44.2829),
    ("Palmas",         -10.2491, -48.3243),
    ("Macapá",           0.0356, -51.0705),
];

/// `(from, to, km)` rail connections.
pub const CONNECTIONS: &[(&str, &str, f64)] = &[
    ("São Paulo",      "Rio de Janeiro",  360.0),
    ("São Paulo",      "Belo Horizonte",  490.0),
    ("São Paulo",      "Curitiba",        338.0),
    ("São Paulo",      "Brasília",        874.0),
    ("Rio de Janeiro", "Vitória",         412.0),
    ("Rio de Janeiro", "Belo Horizonte",  340.0),
    ("Belo Horizonte", "Brasília",        624.0),
    ("Belo Horizonte", "Salvador",       1159.0),
    ("Belo Horizonte", "Vitória",         381.0),
    ("Vitória",        "Salvador",       1044.0),
    ("Salvador",       "Aracaju",         106.0),
    ("Salvador",       "Fortaleza",       833.0),
    ("Salvador",       "Palmas",         1134.0),
    ("Aracaju",        "Maceió",          201.0),
    ("Maceió",         "Recife",          202.0),
    ("Recife",         "João Pessoa",     104.0),
    ("João Pessoa",    "Natal",           151.0),
    ("Natal",          "Fortaleza",       435.0),
    ("Fortaleza",      "Teresina",        496.0),
    ("Teresina",       "São Luis",        329.0),
    ("Teresina",       "Palmas",          832.0),
    ("São Luis",       "Belém",           482.0),
    ("Belém",          "Macapá",          329.0),
    ("Belém",          "Palmas",          970.0),
    ("Brasília",       "Goiânia",         173.0),
    ("Goiânia",        "Campo Grande",    705.0),
    ("Palmas",         "Cuiabá",         1033.0),
    ("Palmas",         "Manaus",         1511.0),
    ("Cuiabá",         "Porto Velho",    1137.0),
    ("Cuiabá",         "Campo Grande",    560.0),
    ("Campo Grande",   "Curitiba",        780.0),
    ("Curitiba",       "Florianópolis",   251.0),
    ("Florianópolis",  "Porto Alegre",    375.0),
    ("Porto Velho",    "Manaus",          759.0),
    ("Porto Velho",    "Rio Branco",      450.0),
    ("Manaus",         "Macapá",         1055.0),
    ("Manaus",         "Boa Vista",       662.0),
    ("Brasília",       "Salvador",       1061.0),
    ("Brasília",       "Cuiabá",          874.0),
    ("Brasília",       "Palmas",          623.0),
];

/// The full national topology.
pub fn brazil() -> Topology {
    Topology::from_tables(CITIES, CONNECTIONS)
}
