//! Static shell serving the frontend bundle. No application endpoints.

use moon::*;

async fn frontend() -> Frontend {
    Frontend::new().title("Open Brain AI").index_by_robots(true)
}

async fn up_msg_handler(_: UpMsgRequest<()>) {}

#[moon::main]
async fn main() -> std::io::Result<()> {
    start(frontend, up_msg_handler, |_error| {}).await
}
