use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use quiver_router::{Context, Method, Outcome, Router, RouterConfig};

fn tag(n: usize) -> impl Fn(Context) -> std::future::Ready<Outcome<usize>> + Send + Sync {
    move |_| std::future::ready(Ok(n))
}

fn api(config: RouterConfig) -> Router<usize> {
    let mut router = Router::with_config(config);
    for (i, res) in ["users", "posts", "tags", "comments", "teams"].iter().enumerate() {
        router.get(&format!("/{}", res), tag(i)).unwrap();
        router.post(&format!("/{}", res), tag(i)).unwrap();
        router.get(&format!("/{}/:id", res), tag(i)).unwrap();
        router.put(&format!("/{}/:id", res), tag(i)).unwrap();
        router.get(&format!("/{}/:id/items/:item", res), tag(i)).unwrap();
    }
    router
}

fn router_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-find");

    group.bench_function("single-route", |b| {
        let mut router: Router<usize> = Router::new();
        router.get("/hello/:name", tag(1)).unwrap();
        b.iter_with_large_drop(|| router.find_route(Method::Get, "/hello/world"))
    });

    let cached = api(RouterConfig::new());
    let uncached = api(RouterConfig::new().last_route_cache(false));

    group.bench_function("static", |b| {
        b.iter_with_large_drop(|| uncached.find_route(Method::Get, "/teams"))
    });

    group.bench_function("dynamic-last", |b| {
        b.iter_with_large_drop(|| uncached.find_route(Method::Get, "/teams/7/items/9"))
    });

    group.bench_function("dynamic-last-cached", |b| {
        b.iter_with_large_drop(|| cached.find_route(Method::Get, "/teams/7/items/9"))
    });

    group.bench_function("miss", |b| {
        b.iter_with_large_drop(|| uncached.find_route(Method::Delete, "/teams/7"))
    });
}

fn router_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-insert");

    group.bench_function("single-route", |b| {
        b.iter_batched_ref(
            Router::new,
            |router: &mut Router<usize>| {
                router.get("/hello/:name", tag(1)).unwrap();
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("mount-api", |b| {
        b.iter_batched(
            || (Router::new(), api(RouterConfig::new())),
            |(mut router, child): (Router<usize>, Router<usize>)| {
                router.mount("/v1", child).unwrap();
                router
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, router_find, router_insert);
criterion_main!(benches);
