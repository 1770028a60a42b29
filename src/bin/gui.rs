fn main() -> Result<(), Box<dyn std::error::Error>> {
    let presenter_factory = mandelzoom::PixelsPresenterFactory::new();
    let command =
        mandelzoom::RunGuiCommand::new(presenter_factory, mandelzoom::ExplorerConfig::default());

    command.execute()
}
