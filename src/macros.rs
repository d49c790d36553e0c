/// Builds a [`Router`](crate::Router) from `METHOD "path" => handler` lines
/// and `@ "prefix" => router!{ .. }` mounts. Evaluates to
/// `Result<Router<_>, RouterError>`.
///
/// ```rust,ignore
/// let router = router! {
///     GET "/u/:uid" => show_user,
///     POST "/u" => create_user,
///     @ "/v1" => router! {
///         GET "/info" => info
///     }
/// }?;
/// ```
#[macro_export]
macro_rules! router {
    {@entry $router:expr, @, $prefix:expr, $sub_router:expr} => {
        $router.mount($prefix, $sub_router?)?
    };
    {@entry $router:expr, GET, $pattern:expr, $data:expr} => {
        $router.get($pattern, $data)?
    };
    {@entry $router:expr, POST, $pattern:expr, $data:expr} => {
        $router.post($pattern, $data)?
    };
    {@entry $router:expr, PUT, $pattern:expr, $data:expr} => {
        $router.put($pattern, $data)?
    };
    {@entry $router:expr, PATCH, $pattern:expr, $data:expr} => {
        $router.patch($pattern, $data)?
    };
    {@entry $router:expr, DELETE, $pattern:expr, $data:expr} => {
        $router.delete($pattern, $data)?
    };
    {@entry $router:expr, OPTIONS, $pattern:expr, $data:expr} => {
        $router.options($pattern, $data)?
    };
    {@entry $router:expr, HEAD, $pattern:expr, $data:expr} => {
        $router.head($pattern, $data)?
    };
    {@entry $router:expr, ALL, $pattern:expr, $data:expr} => {
        $router.all($pattern, $data)?
    };

    {$($method:tt $pattern:expr => $data:expr),+ $(,)?} => {{
        let __build = || -> ::std::result::Result<_, $crate::RouterError> {
            let mut __router = $crate::Router::new();
            $($crate::router!(@entry __router, $method, $pattern, $data);)+
            Ok(__router)
        };
        __build()
    }};
}
