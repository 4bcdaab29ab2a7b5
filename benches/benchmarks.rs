// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use deckroute::{DeckParams, QueryRoutes, RepoRenderer, RepoSnapshot, RouteBuilder, Theme};

fn benchmark_normalization(c: &mut Criterion,)
{
    c.bench_function("build_full_defaulted", |b| {
        b.iter(|| {
            DeckParams::build_full(
                black_box("acme",),
                black_box("deck",),
                black_box(None,),
                black_box(Some("bogus",),),
                black_box(None,),
            )
        },)
    },);
}

fn benchmark_renderer_construction(c: &mut Criterion,)
{
    let params = DeckParams::build_with_theme("acme", "deck", "master", "night",);
    let snapshot = RepoSnapshot {
        owner:      "acme".to_owned(),
        name:       "deck".to_owned(),
        stargazers: 1200,
        forks:      80,
        lang:       Some("Rust".to_owned(),),
    };
    let routes = QueryRoutes;

    c.bench_function("renderer_build_verified", |b| {
        b.iter(|| {
            let renderer =
                RepoRenderer::build(black_box(&params,), black_box(Some(&snapshot,),), &routes,);
            black_box(renderer.landing_url().len(),)
        },)
    },);

    c.bench_function("renderer_link_document", |b| {
        let renderer = RepoRenderer::build(&params, Some(&snapshot,), &routes,);
        b.iter(|| black_box(renderer.link_document(None,),),)
    },);
}

fn benchmark_route_building(c: &mut Criterion,)
{
    let routes = QueryRoutes;

    c.bench_function("landing_route", |b| {
        b.iter(|| {
            routes.landing(
                black_box("acme",),
                black_box("deck",),
                black_box("feature-x",),
                black_box(Theme::Moon,),
                black_box(Some("true",),),
            )
        },)
    },);
}

criterion_group!(
    benches,
    benchmark_normalization,
    benchmark_renderer_construction,
    benchmark_route_building
);
criterion_main!(benches);
