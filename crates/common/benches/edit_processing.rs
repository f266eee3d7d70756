// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Benchmarks for per-keystroke edit processing.
//!
//! Focus areas:
//! 1. Digit extraction on display strings
//! 2. Precise vs fallback formatting
//! 3. The full evaluate path for both edit profiles

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use currency_field_common::processor::EditProcessor;
use currency_field_core::{digits::only_digits, string::Utf16Range};
use currency_field_model::{
    config::Configuration,
    edit::EditRequest,
    enums::{EditProfile, FormatterKind},
    stubs::settings,
    types::fixed::DEFAULT_MAXIMUM_VALUE,
};
use rust_decimal_macros::dec;

fn config(profile: EditProfile, formatter_kind: FormatterKind) -> Configuration {
    Configuration::new(settings(
        profile,
        formatter_kind,
        DEFAULT_MAXIMUM_VALUE,
        false,
    ))
}

// --
// Benchmark: Digit extraction
// --

fn bench_only_digits(c: &mut Criterion) {
    let mut group = c.benchmark_group("Digit extraction");
    group.throughput(Throughput::Elements(1));

    group.bench_function("ASCII display text", |b| {
        b.iter(|| only_digits(black_box("R$ 999.999.999,99")));
    });

    group.bench_function("Arabic-Indic display text", |b| {
        b.iter(|| only_digits(black_box("\u{0661}\u{0662}\u{0663}\u{066B}\u{0664}\u{0665}")));
    });

    group.finish();
}

// --
// Benchmark: Formatting
// --

fn bench_formatted(c: &mut Criterion) {
    let precise = config(EditProfile::Decimal, FormatterKind::Precise);
    let fallback = config(EditProfile::Decimal, FormatterKind::Fallback);
    let value = dec!(1234567.89);

    let mut group = c.benchmark_group("Formatting");
    group.throughput(Throughput::Elements(1));

    group.bench_function("Precise", |b| {
        b.iter(|| precise.formatter().formatted(black_box(value)));
    });

    group.bench_function("Fallback", |b| {
        b.iter(|| fallback.formatter().formatted(black_box(value)));
    });

    group.finish();
}

// --
// Benchmark: Full evaluate path
// --

fn bench_evaluate(c: &mut Criterion) {
    let request = EditRequest::new("R$ 1.234,56", Utf16Range::caret(11), "7");

    let mut group = c.benchmark_group("Evaluate keystroke");
    group.throughput(Throughput::Elements(1));

    for (name, profile) in [
        ("Decimal profile", EditProfile::Decimal),
        ("Legacy profile", EditProfile::Legacy),
    ] {
        let processor = EditProcessor::new(config(profile, FormatterKind::Precise));
        group.bench_function(name, |b| {
            b.iter(|| processor.evaluate(black_box(&request)));
        });
    }

    let rejecting = EditProcessor::new(Configuration::new(settings(
        EditProfile::Decimal,
        FormatterKind::Precise,
        dec!(100.00),
        false,
    )));
    group.bench_function("Rejected by ceiling", |b| {
        b.iter(|| rejecting.evaluate(black_box(&request)));
    });

    group.finish();
}

criterion_group!(benches, bench_only_digits, bench_formatted, bench_evaluate);
criterion_main!(benches);
