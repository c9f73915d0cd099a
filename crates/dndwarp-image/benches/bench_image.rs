use criterion::{criterion_group, criterion_main, Criterion};
use dndwarp_image::{ops, Image, ImageSize};
use std::hint::black_box;

fn sample_image() -> Image<u8, 4> {
    Image::from_size_val(
        ImageSize {
            width: 1920,
            height: 1080,
        },
        127,
    )
    .unwrap()
}

fn bench_image(c: &mut Criterion) {
    let mut group = c.benchmark_group("Image");

    group.bench_function("cast_u8_to_f32", |b| {
        let image = sample_image();
        b.iter(|| black_box(&image).cast::<f32>().unwrap())
    });

    group.bench_function("take_channels_rgba_to_rgb", |b| {
        b.iter_batched(
            sample_image,
            |image| ops::take_channels::<_, 4, 3>(black_box(&image)).unwrap(),
            criterion::BatchSize::LargeInput,
        )
    });

    group.bench_function("convert_f32_to_u8", |b| {
        b.iter_batched(
            || sample_image().cast::<f32>().unwrap(),
            |image| ops::convert::<u8, 4>(black_box(&image)).unwrap(),
            criterion::BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_image);
criterion_main!(benches);
