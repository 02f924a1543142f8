//! Built-in sample catalog of 20 desktop GPUs

use rankx_core::{AttributeSchema, Candidate, Catalog, Result};

/// name, price (USD), PassMark score, VRAM (GB), release year
const SAMPLE_GPUS: &[(&str, f64, f64, f64, f64)] = &[
    ("NVIDIA RTX 4090", 1599.0, 38929.0, 24.0, 2022.0),
    ("NVIDIA RTX 4080 Super", 999.0, 34835.0, 16.0, 2024.0),
    ("NVIDIA RTX 4080", 1199.0, 34595.0, 16.0, 2022.0),
    ("NVIDIA RTX 4070 Ti Super", 799.0, 31560.0, 16.0, 2024.0),
    ("NVIDIA RTX 4070 Ti", 799.0, 31298.0, 12.0, 2023.0),
    ("NVIDIA RTX 4070 Super", 599.0, 27444.0, 12.0, 2024.0),
    ("NVIDIA RTX 4070", 549.0, 23332.0, 12.0, 2023.0),
    ("NVIDIA RTX 4060 Ti", 399.0, 22052.0, 8.0, 2023.0),
    ("NVIDIA RTX 4060", 299.0, 19444.0, 8.0, 2023.0),
    ("AMD Radeon RX 7900 XTX", 949.0, 33611.0, 24.0, 2022.0),
    ("AMD Radeon RX 7900 XT", 749.0, 29563.0, 20.0, 2022.0),
    ("AMD Radeon RX 7800 XT", 499.0, 24987.0, 16.0, 2023.0),
    ("AMD Radeon RX 7700 XT", 449.0, 22155.0, 12.0, 2023.0),
    ("AMD Radeon RX 7600", 269.0, 17016.0, 8.0, 2023.0),
    ("Intel Arc A770", 329.0, 18562.0, 16.0, 2022.0),
    ("Intel Arc A750", 249.0, 16321.0, 8.0, 2022.0),
    ("NVIDIA RTX 3090 Ti", 999.0, 29876.0, 24.0, 2022.0),
    ("NVIDIA RTX 3080 Ti", 699.0, 26444.0, 12.0, 2021.0),
    ("NVIDIA RTX 3070", 399.0, 21987.0, 8.0, 2020.0),
    ("NVIDIA RTX 3060", 279.0, 16976.0, 12.0, 2021.0),
];

/// Sample candidates in GPU schema order
pub fn sample_candidates() -> Vec<Candidate> {
    SAMPLE_GPUS
        .iter()
        .map(|&(name, price, benchmark, vram, year)| {
            Candidate::new(name, vec![price, benchmark, vram, year])
        })
        .collect()
}

/// The sample candidates under the GPU schema
pub fn sample_catalog() -> Result<Catalog> {
    Catalog::new(AttributeSchema::gpu(), sample_candidates())
}
