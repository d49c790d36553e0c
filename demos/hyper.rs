use quiver_router::hyper_service::{Response, RouterService};
use quiver_router::{middleware_fn, router, Context, Next, Outcome};

use std::convert::Infallible as Never;
use std::time::Instant;

use hyper::service::make_service_fn;
use hyper::Body;

async fn hello(ctx: Context) -> Outcome<Response> {
    let name = ctx.param("name").unwrap_or("stranger");
    Ok(Response::new(Body::from(format!("hello, {}!", name))))
}

async fn file(ctx: Context) -> Outcome<Response> {
    let name = ctx.param("name").unwrap_or_default();
    Ok(Response::new(Body::from(format!("access file: {}", name))))
}

async fn version(_: Context) -> Outcome<Response> {
    Ok(Response::new(Body::from(env!("CARGO_PKG_VERSION"))))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut router = router! {
        GET "/hello/:name" => hello,
        @ "/api/v1" => router! {
            GET "/files/:name" => file,
            GET "/version" => version
        }
    }?;

    let timed = router! {
        GET "/slow/:name" => hello
    }?;
    router.mount_with(
        "/timed",
        [middleware_fn(|ctx: Context, next: Next<Response>| async move {
            let start = Instant::now();
            let path = ctx.path().to_owned();
            let res = next.run(ctx).await;
            println!("{} took {:?}", path, start.elapsed());
            res
        })],
        timed,
    )?;

    for route in router.routes() {
        println!("{:<6} {}", route.method, route.path);
    }
    println!();

    let service = RouterService::new(router);
    let make = make_service_fn(move |_| {
        let service = service.clone();
        async move { Ok::<_, Never>(service) }
    });

    let addr = "127.0.0.1:3000";
    let server = hyper::Server::bind(&addr.parse()?).serve(make);

    println!("Server is listening on: http://{}", addr);
    println!("hello: http://{}/hello/world", addr);
    println!("api: http://{}/api/v1/files/readme.md", addr);
    println!("timed: http://{}/timed/slow/world", addr);
    println!("404: http://{}/other/path", addr);
    println!();

    server.await?;
    Ok(())
}
