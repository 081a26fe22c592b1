use anyhow::{bail, Context};
use getopts::Options;
use log::*;
use spheretrace::config::RenderConfig;
use spheretrace::renderer::Renderer;
use spheretrace::sink::{ImageSink, LogProgress, PngSink};
use spheretrace::*;

fn parse_camera(s: &str) -> anyhow::Result<P3> {
    let xs = s
        .split(',')
        .map(|x| x.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("invalid camera position {:?}", s))?;
    match xs[..] {
        [x, y, z] => Ok(P3::new(x, y, z)),
        _ => bail!("camera position needs three components, got {:?}", s),
    }
}

fn parse_count(matches: &getopts::Matches, name: &str, default: usize) -> anyhow::Result<usize> {
    matches
        .opt_get_default(name, default)
        .with_context(|| format!("--{} expects a positive integer", name))
}

fn program_name(args: &[String]) -> &str {
    args.first().map_or("spheretrace", String::as_str)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let program = program_name(&args);

    let mut opts = Options::new();
    opts.optopt("", "width", "image width in pixels (default 200)", "N");
    opts.optopt("", "height", "image height in pixels (default 200)", "N");
    opts.optopt("d", "depth", "maximum reflection depth (default 3)", "N");
    opts.optopt("j", "threads", "number of render threads", "N");
    opts.optopt("o", "output", "output PNG path (default image.png)", "PATH");
    opts.optopt("c", "camera", "camera position (default 0,0,1)", "X,Y,Z");
    opts.optflag("", "help", "print this help menu");

    let matches = opts.parse(args.get(1..).unwrap_or(&[]))?;
    if matches.opt_present("help") {
        let brief = format!("Usage: {} [options]", program);
        print!("{}", opts.usage(&brief));
        return Ok(());
    }

    let default = RenderConfig::default();
    let config = RenderConfig {
        width: parse_count(&matches, "width", default.width)?,
        height: parse_count(&matches, "height", default.height)?,
        max_depth: parse_count(&matches, "depth", default.max_depth)?,
        nthread: parse_count(&matches, "threads", default.nthread)?,
    };
    config.validate()?;
    debug!("{:?}", config);

    let camera = match matches.opt_str("camera") {
        Some(s) => parse_camera(&s)?,
        None => example_scenes::default_camera(),
    };
    let output = matches
        .opt_str("output")
        .unwrap_or_else(|| "image.png".to_string());

    let scene = example_scenes::three_spheres(camera).context("building scene")?;
    let film = Renderer
        .render(&scene, &config, &mut LogProgress)
        .context("rendering")?;
    PngSink::new(&output)
        .write(&film)
        .with_context(|| format!("writing {}", output))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_name_without_argv() {
        assert_eq!(program_name(&[]), "spheretrace");
        assert_eq!(program_name(&["st".to_string()]), "st");
    }

    #[test]
    fn camera_option() {
        assert_eq!(parse_camera("0, 0.5,2").unwrap(), P3::new(0.0, 0.5, 2.0));
        assert!(parse_camera("1,2").is_err());
        assert!(parse_camera("a,b,c").is_err());
    }
}
