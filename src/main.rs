use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let presenter = mandelzoom::PpmFilePresenter::new();
    let mut controller = mandelzoom::CliRenderController::with_default_view(presenter);

    fs::create_dir_all("output")?;
    controller.generate()?;
    controller.write("output/mandelbrot.ppm")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_returns_ok() {
        let result = main();

        assert!(result.is_ok());
    }
}
