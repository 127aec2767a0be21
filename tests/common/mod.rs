// common/mod.rs - Fixture dataset shared by the integration tests.
//
// A small slice of the Unicode data, encoded through the public writer so the
// tests run without the generated .dat files.

#![allow(dead_code)]

use std::path::PathBuf;

use ucdata::prelude::*;
use ucdata::writer::{write_case, write_cmbcl, write_ctype, write_decomp, write_num};

fn index(cat: Category) -> usize {
    cat.indices().next().unwrap()
}

pub fn ctype_ranges() -> Vec<Vec<(Codepoint, Codepoint)>> {
    let mut cats = vec![Vec::new(); 49];
    let mut set = |cat: Category, ranges: &[(Codepoint, Codepoint)]| {
        cats[index(cat)] = ranges.to_vec();
    };
    set(Category::MN, &[(0x300, 0x36f), (0xfe20, 0xfe23)]);
    set(Category::ND, &[(0x30, 0x39), (0x660, 0x669), (0x966, 0x96f), (0xff10, 0xff19)]);
    set(Category::NO, &[(0xbc, 0xbe)]);
    set(Category::ZS, &[(0x20, 0x20), (0xa0, 0xa0), (0x3000, 0x3000)]);
    set(Category::CC, &[(0x00, 0x1f), (0x7f, 0x9f)]);
    set(
        Category::LU,
        &[
            (0x41, 0x5a),
            (0xc0, 0xd6),
            (0xd8, 0xde),
            (0x1c4, 0x1c4),
            (0x1c7, 0x1c7),
            (0x1ca, 0x1ca),
            (0x1d5, 0x1d5),
            (0x1f1, 0x1f1),
            (0xff21, 0xff3a),
        ],
    );
    set(
        Category::LL,
        &[
            (0x61, 0x7a),
            (0xdf, 0xf6),
            (0xf8, 0xff),
            (0x1c6, 0x1c6),
            (0x1c9, 0x1c9),
            (0x1cc, 0x1cc),
            (0x1d6, 0x1d6),
            (0x1f3, 0x1f3),
            (0xff41, 0xff5a),
        ],
    );
    set(Category::LT, &[(0x1c5, 0x1c5), (0x1c8, 0x1c8), (0x1cb, 0x1cb), (0x1f2, 0x1f2)]);
    set(Category::LO, &[(0x5d0, 0x5ea), (0x4e00, 0x9fa5), (0xac00, 0xd7a3)]);
    set(Category::PC, &[(0x5f, 0x5f)]);
    set(Category::PD, &[(0x2d, 0x2d)]);
    set(Category::PS, &[(0x28, 0x28)]);
    set(Category::PE, &[(0x29, 0x29)]);
    set(Category::PO, &[(0x21, 0x23), (0x25, 0x27)]);
    set(Category::SM, &[(0x2b, 0x2b)]);
    set(Category::SC, &[(0x24, 0x24)]);
    set(Category::L, &[(0x41, 0x5a), (0x61, 0x7a)]);
    set(Category::R, &[(0x5d0, 0x5ea)]);
    set(Category::EN, &[(0x30, 0x39)]);
    set(Category::WS, &[(0x20, 0x20)]);
    set(Category::CM, &[(0xc0, 0xc5), (0x1d5, 0x1d5)]);
    set(Category::NB, &[(0xa0, 0xa0)]);
    set(Category::HD, &[(0x30, 0x39), (0x41, 0x46), (0x61, 0x66)]);
    set(Category::QM, &[(0x22, 0x22), (0x27, 0x27)]);
    set(Category::MR, &[(0x28, 0x29)]);
    set(Category::SS, &[(0x20, 0x20), (0x3000, 0x3000)]);
    set(
        Category::CP,
        &[
            (0x00, 0x377),
            (0x5d0, 0x5ea),
            (0x660, 0x669),
            (0x966, 0x96f),
            (0x3000, 0x3000),
            (0x4e00, 0x9fa5),
            (0xac00, 0xd7a3),
            (0xfe20, 0xfe23),
            (0xff10, 0xff5a),
        ],
    );
    cats
}

/// Upper-keyed case triplets `(upper, lower, title)`.
pub fn upper_map() -> Vec<[Codepoint; 3]> {
    let mut map: Vec<[Codepoint; 3]> = (0x41..=0x5a)
        .chain(0xc0..=0xd6)
        .chain(0xd8..=0xde)
        .chain(0xff21..=0xff3a)
        .map(|c| [c, c + 0x20, c])
        .collect();
    map.extend([
        [0x1c4, 0x1c6, 0x1c5],
        [0x1c7, 0x1c9, 0x1c8],
        [0x1ca, 0x1cc, 0x1cb],
        [0x1d5, 0x1d6, 0x1d5],
        [0x1f1, 0x1f3, 0x1f2],
    ]);
    map
}

/// Lower-keyed case triplets `(lower, upper, title)`.
pub fn lower_map() -> Vec<[Codepoint; 3]> {
    upper_map()
        .into_iter()
        .map(|[u, l, t]| [l, u, t])
        .collect()
}

/// Title-keyed case triplets `(title, upper, lower)`.
pub fn title_map() -> Vec<[Codepoint; 3]> {
    vec![
        [0x1c5, 0x1c4, 0x1c6],
        [0x1c8, 0x1c7, 0x1c9],
        [0x1cb, 0x1ca, 0x1cc],
        [0x1f2, 0x1f1, 0x1f3],
    ]
}

pub fn decompositions() -> Vec<(Codepoint, Vec<Codepoint>)> {
    vec![
        (0xc0, vec![0x41, 0x300]),
        (0xc1, vec![0x41, 0x301]),
        (0xc5, vec![0x41, 0x30a]),
        (0xdc, vec![0x55, 0x308]),
        (0x1d5, vec![0xdc, 0x304]),
        (0x212b, vec![0xc5]),
    ]
}

pub fn combining_classes() -> Vec<(Codepoint, Codepoint, i32)> {
    vec![
        (0x300, 0x314, 230),
        (0x315, 0x315, 232),
        (0x316, 0x319, 220),
        (0x334, 0x338, 1),
        (0xfe20, 0xfe23, 230),
    ]
}

pub fn numeric_values() -> Vec<(Codepoint, i16, i16)> {
    let mut entries = Vec::new();
    for base in [0x30, 0x660, 0x966, 0xff10] {
        entries.extend((0..10).map(|d| (base + d as Codepoint, d, d)));
    }
    entries.extend([(0xbc, 1, 4), (0xbd, 1, 2), (0xbe, 3, 4), (0x4e00, 1, 1)]);
    entries
}

/// The five encoded table files, keyed by file name.
pub fn files(order: ByteOrder) -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("ctype.dat", write_ctype(order, &ctype_ranges()).unwrap()),
        (
            "case.dat",
            write_case(order, &upper_map(), &lower_map(), &title_map()).unwrap(),
        ),
        ("decomp.dat", write_decomp(order, &decompositions()).unwrap()),
        ("cmbcl.dat", write_cmbcl(order, &combining_classes()).unwrap()),
        ("num.dat", write_num(order, &numeric_values()).unwrap()),
    ]
}

pub fn memory_source(order: ByteOrder) -> MemorySource {
    files(order)
        .into_iter()
        .fold(MemorySource::new(), |src, (name, bytes)| src.with(name, bytes))
}

/// Registry with every table loaded from the fixture.
pub fn loaded(order: ByteOrder) -> UcData {
    let mut ucd = UcData::new();
    let report = ucd.load(&memory_source(order), Tables::ALL);
    assert!(report.is_ok(), "fixture failed to load: {:?}", report);
    ucd
}

/// Write the fixture files to a fresh scratch directory.
pub fn write_dir(tag: &str, order: ByteOrder) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ucdata-{}-{}", tag, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    for (name, bytes) in files(order) {
        std::fs::write(dir.join(name), bytes).unwrap();
    }
    dir
}
