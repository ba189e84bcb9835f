use std::fs::read;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ppmedit_benches::sample_path;
use ppmedit_core::format::PpmFormat;
use ppmedit_core::options::DecoderOptions;
use ppmedit_image::image::Image;
use ppmedit_image::traits::OperationsTrait;
use ppmedit_imageprocs::convert::{Convert, ConvertTarget};
use ppmedit_imageprocs::enlarge::Enlarge;
use ppmedit_ppm::PPMDecoder;

/// Encode an enlarged copy of the sample in `format`
fn encoded_sample(format: PpmFormat) -> Vec<u8> {
    let path = sample_path().join("test-images/ppm/sample_binary.ppm");
    let data = read(path).unwrap();
    let mut image = Image::read(&data, DecoderOptions::default()).unwrap();

    for _ in 0..6 {
        Enlarge::new().execute(&mut image);
    }
    let target = match format {
        PpmFormat::Ascii => ConvertTarget::Ascii,
        PpmFormat::Binary => ConvertTarget::Binary
    };
    Convert::new(target).execute(&mut image);

    image.to_ppm().unwrap()
}

fn decode_ppm(c: &mut Criterion, format: PpmFormat) {
    let data = encoded_sample(format);

    let mut group = c.benchmark_group("ppm: decode");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function(format!("{format}"), |b| {
        b.iter(|| {
            let mut decoder = PPMDecoder::new(black_box(&data));
            black_box(decoder.decode().unwrap());
        })
    });
}

fn decode_ascii(c: &mut Criterion) {
    decode_ppm(c, PpmFormat::Ascii);
}

fn decode_binary(c: &mut Criterion) {
    decode_ppm(c, PpmFormat::Binary);
}

fn encode_ppm(c: &mut Criterion) {
    let data = encoded_sample(PpmFormat::Ascii);
    let image = Image::read(&data, DecoderOptions::default()).unwrap();

    let mut group = c.benchmark_group("ppm: encode");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("P3", |b| {
        b.iter(|| {
            black_box(image.to_ppm().unwrap());
        })
    });
}

criterion_group!(benches, decode_ascii, decode_binary, encode_ppm);

criterion_main!(benches);
