use criterion::{Criterion, black_box, criterion_group, criterion_main};
use poketheme::{
    HexColor, PokemonType, TypeColorTable, contrast_color, lighten_color, resolve_theme,
    resolve_type_color,
};

const PALETTE_TOML: &str = r##"
fire = "#FF4422"
water = "#3399FF"
grass = "#55CC33"
"##;

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("poketheme/lookup");

    group.bench_function("resolve_type_color/known", |b| {
        b.iter(|| black_box(resolve_type_color(black_box("fairy"))));
    });

    group.bench_function("resolve_type_color/uppercase", |b| {
        b.iter(|| black_box(resolve_type_color(black_box("FAIRY"))));
    });

    group.bench_function("resolve_type_color/unknown", |b| {
        b.iter(|| black_box(resolve_type_color(black_box("missingno"))));
    });

    group.bench_function("PokemonType::from_name/all", |b| {
        b.iter(|| {
            for ty in PokemonType::ALL {
                black_box(PokemonType::from_name(black_box(ty.name())));
            }
        });
    });

    group.finish();
}

fn bench_themes(c: &mut Criterion) {
    let mut group = c.benchmark_group("poketheme/themes");

    group.bench_function("resolve_theme/single", |b| {
        b.iter(|| black_box(resolve_theme(black_box(&["fire"]))));
    });

    group.bench_function("resolve_theme/dual", |b| {
        b.iter(|| black_box(resolve_theme(black_box(&["water", "poison"]))));
    });

    group.bench_function("resolve_theme/unknown_secondary", |b| {
        b.iter(|| black_box(resolve_theme(black_box(&["water", "unknown-type"]))));
    });

    group.finish();
}

fn bench_colors(c: &mut Criterion) {
    let mut group = c.benchmark_group("poketheme/colors");

    group.bench_function("HexColor::parse", |b| {
        b.iter(|| black_box(HexColor::parse(black_box("#6890F0"))));
    });

    group.bench_function("contrast_color", |b| {
        b.iter(|| black_box(contrast_color(black_box("#6890F0"))));
    });

    group.bench_function("lighten_color", |b| {
        b.iter(|| black_box(lighten_color(black_box("water"))));
    });

    group.finish();
}

fn bench_palette(c: &mut Criterion) {
    let mut group = c.benchmark_group("poketheme/palette");

    group.bench_function("TypeColorTable::from_toml", |b| {
        b.iter(|| black_box(TypeColorTable::from_toml(black_box(PALETTE_TOML))));
    });

    group.bench_function("TypeColorTable::to_json", |b| {
        b.iter(|| black_box(TypeColorTable::standard().to_json()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lookup,
    bench_themes,
    bench_colors,
    bench_palette
);
criterion_main!(benches);
