use quiver_router::{Context, Endpoint, Method, Outcome, Router};

use proptest::collection::{hash_set, vec};
use proptest::prelude::*;

fn tag(n: usize) -> impl Fn(Context) -> std::future::Ready<Outcome<usize>> + Send + Sync {
    move |_| std::future::ready(Ok(n))
}

fn segment() -> impl Strategy<Value = String> {
    "[a-z0-9_.~-]{1,12}"
}

fn method() -> impl Strategy<Value = Method> {
    prop::sample::select(Method::VARIANTS.to_vec())
}

proptest! {
    #[test]
    fn static_beats_dynamic(
        lit in "[a-z]{1,8}",
        name in "[a-z]{1,8}",
        head in segment(),
        static_first in any::<bool>(),
    ) {
        let static_path = format!("/{}/{}", head, lit);
        let dynamic_path = format!("/{}/:{}", head, name);

        let mut router: Router<usize> = Router::new();
        if static_first {
            router.get(&static_path, tag(0)).unwrap();
            router.get(&dynamic_path, tag(1)).unwrap();
        } else {
            router.get(&dynamic_path, tag(1)).unwrap();
            router.get(&static_path, tag(0)).unwrap();
        }

        let m = router.find_route(Method::Get, &static_path).unwrap();
        prop_assert_eq!(m.route().path(), static_path.as_str());
        prop_assert!(m.params().is_empty());
    }

    #[test]
    fn params_are_extracted_verbatim(values in vec(segment(), 1..6)) {
        let names: Vec<String> = (0..values.len()).map(|i| format!("p{}", i)).collect();
        let template: String = names.iter().map(|n| format!("/:{}", n)).collect();
        let path: String = values.iter().map(|v| format!("/{}", v)).collect();

        let mut router: Router<usize> = Router::new();
        router.put(&template, tag(0)).unwrap();

        let m = router.find_route(Method::Put, &path).unwrap();
        prop_assert_eq!(m.params().len(), values.len());
        for (name, value) in names.iter().zip(&values) {
            prop_assert_eq!(m.params().get(name), Some(value.as_str()));
        }
        let extra = format!("{}/extra", path);
        prop_assert!(router.find_route(Method::Put, &extra).is_none());
    }

    #[test]
    fn every_distinct_registration_is_listed(
        paths in hash_set(vec(segment(), 1..4), 1..24),
        m in method(),
    ) {
        let mut router: Router<usize> = Router::new();
        let mut expected = Vec::new();
        for (i, segs) in paths.iter().enumerate() {
            let path: String = segs.iter().map(|s| format!("/{}", s)).collect();
            router.route(m, &path, Endpoint::new(tag(i))).unwrap();
            expected.push((m, path));
        }

        let listed: Vec<(Method, String)> =
            router.routes().into_iter().map(|r| (r.method, r.path)).collect();
        prop_assert_eq!(router.len(), paths.len());
        prop_assert_eq!(&listed, &expected);

        for (_, path) in &expected {
            let found = router.find_route(m, &format!("{}/", path)).unwrap();
            prop_assert_eq!(found.route().path(), path.as_str());
        }
    }

    #[test]
    fn lookup_never_panics(path in "[/a-z:%?#]{0,24}", m in method()) {
        let mut router: Router<usize> = Router::new();
        router.get("/a/:b", tag(0)).unwrap();
        router.all("/a", tag(1)).unwrap();
        let _ = router.find_route(m, &path);
        let _ = Router::<usize>::new().get(&path, tag(2));
    }
}
