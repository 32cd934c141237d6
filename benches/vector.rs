// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![feature(test)]

extern crate test;
extern crate trievec;

use std::iter::FromIterator;
use test::Bencher;

use trievec::vector::Vector;

fn vector_push_back(b: &mut Bencher, count: usize) {
    b.iter(|| {
        let mut l = Vector::new();
        for i in 0..count {
            l = l.push_back(i)
        }
    })
}

#[bench]
fn vector_push_back_10(b: &mut Bencher) {
    vector_push_back(b, 10)
}

#[bench]
fn vector_push_back_100(b: &mut Bencher) {
    vector_push_back(b, 100)
}

#[bench]
fn vector_push_back_1000(b: &mut Bencher) {
    vector_push_back(b, 1000)
}

fn vector_get(b: &mut Bencher, count: usize) {
    let l = Vector::from_iter(0..count);
    b.iter(|| {
        for i in 0..count {
            test::black_box(l.get(i));
        }
    })
}

#[bench]
fn vector_get_1000(b: &mut Bencher) {
    vector_get(b, 1000)
}

fn vector_iter(b: &mut Bencher, count: usize) {
    let l = Vector::from_iter(0..count);
    b.iter(|| {
        for i in l.iter() {
            test::black_box(i);
        }
    })
}

#[bench]
fn vector_iter_1000(b: &mut Bencher) {
    vector_iter(b, 1000)
}

fn vector_cursor_sweep(b: &mut Bencher, count: usize) {
    let l = Vector::from_iter(0..count);
    b.iter(|| {
        let mut cursor = l.cursor();
        for _ in 0..count {
            test::black_box(cursor.get());
            cursor.advance(1);
        }
    })
}

#[bench]
fn vector_cursor_sweep_1000(b: &mut Bencher) {
    vector_cursor_sweep(b, 1000)
}
