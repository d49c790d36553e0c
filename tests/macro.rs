use quiver_router::{router, Context, Method, Outcome, Router, RouterError};

fn tag(n: i32) -> impl Fn(Context) -> std::future::Ready<Outcome<i32>> + Send + Sync {
    move |_| std::future::ready(Ok(n))
}

async fn run(router: &Router<i32>, method: Method, path: &str) -> Option<i32> {
    let fut = router.dispatch(Context::new(method, path))?;
    Some(fut.await.unwrap())
}

#[tokio::test]
async fn router_macro() {
    let router: Router<i32> = router! {
        GET "/u/:uid/p/:pid" => tag(1),
        POST "/u/:uid/p" => tag(2),
        @ "/v1" => router! {
            GET "/info" => tag(3),
            POST "/info" => tag(4),
            @ "/u/:uid" => router! {
                GET "/p/:pid" => tag(6),
                POST "/p" => tag(7)
            }
        },
        ALL "/health" => tag(5),
    }
    .unwrap();

    assert_eq!(run(&router, Method::Get, "/u/asd/p/qwe").await, Some(1));
    assert_eq!(run(&router, Method::Post, "/u/asd/p").await, Some(2));
    assert_eq!(run(&router, Method::Get, "/v1/info").await, Some(3));
    assert_eq!(run(&router, Method::Post, "/v1/info").await, Some(4));
    assert_eq!(run(&router, Method::Head, "/health").await, Some(5));
    assert_eq!(run(&router, Method::Get, "/v1/u/asd/p/qwe").await, Some(6));
    assert_eq!(run(&router, Method::Post, "/v1/u/asd/p").await, Some(7));
    assert_eq!(run(&router, Method::Put, "/v1/info").await, None);

    let m = router.find_route(Method::Get, "/v1/u/a/p/b").unwrap();
    assert_eq!(m.params().get("uid"), Some("a"));
    assert_eq!(m.params().get("pid"), Some("b"));
    assert_eq!(router.len(), 7);
}

#[test]
fn router_macro_errors() {
    let dup: Result<Router<i32>, RouterError> = router! {
        GET "/a" => tag(1),
        GET "/a/" => tag(2)
    };
    assert_eq!(
        dup.unwrap_err(),
        RouterError::DuplicateRouteRegistration {
            method: Method::Get,
            path: "/a".into(),
        }
    );

    let nested: Result<Router<i32>, RouterError> = router! {
        GET "/ok" => tag(1),
        @ "/v1" => router! {
            DELETE "/x//y" => tag(2)
        }
    };
    assert!(matches!(
        nested,
        Err(RouterError::InvalidRoutePath { .. })
    ));
}
