use notiv_icons::app;

fn main() -> anyhow::Result<()> {
    app::run()
}
