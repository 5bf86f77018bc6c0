mod app_config;

use self::app_config::{AppConfig, GenerateConfig, DEFAULT_CONFIG_FILE};
use anyhow::{Context, Error as AnyError};
use hexmap::{
    hex::HexCoord,
    map::{MapError, TerrainDeck, TileGrid, TileMapData},
    render::SvgRenderer,
    TileMap,
};
use rand::{rngs::StdRng, SeedableRng};
use std::{env, fs};

/// Assemble a hexagonal island from a fresh deck, placed to touch the left and bottom edges.
fn generate_map(config: &GenerateConfig) -> Result<TileMapData, MapError> {
    let mut deck = match config.seed {
        Some(seed) => TerrainDeck::with_rng(&mut StdRng::seed_from_u64(seed)),
        None => TerrainDeck::new(),
    };

    let radius = config.radius as i32;
    // keep the center on grid, the x and y parity has to match
    let center = HexCoord::new(2 * radius + radius % 2, radius);
    log::info!("Generating island of radius {} around {}...", radius, center);

    let grid = TileGrid::from_deck(center.spiral(config.radius), &mut deck)?;
    Ok(TileMapData::new(grid))
}

fn run() -> Result<(), AnyError> {
    let config_file = env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_owned());
    let config = AppConfig::new(&config_file).with_context(|| format!("Failed to load configuration {config_file}"))?;

    let data = match &config.map_file {
        Some(map_file) => TileMapData::load_from_file(map_file).with_context(|| format!("Failed to load {map_file}"))?,
        None => generate_map(&config.generate).context("Failed to generate map")?,
    };

    if let Some(save_map_file) = &config.save_map_file {
        log::info!("Saving map to {}...", save_map_file);
        fs::write(save_map_file, data.save_to_string()?).with_context(|| format!("Failed to write {save_map_file}"))?;
    }

    let mut map = TileMap::new(data, &config.layout);
    log::info!(
        "Map of {} tiles and {} paths, tile size: {:.2}",
        map.grid().len(),
        map.paths().len(),
        map.layout().tile_size()
    );

    for &(x, y) in &config.pointers {
        match map.pointer_moved(x, y) {
            Some(coord) => log::info!("Pointer at ({x}, {y}) selects {coord}"),
            None => log::info!("Pointer at ({x}, {y}) selects nothing"),
        }
    }

    let (width, height) = map.layout().viewport();
    let mut renderer = SvgRenderer::new(width, height, map.layout().vertical_axis());
    map.render(&mut renderer);

    log::info!("Writing {}...", config.output_file);
    fs::write(&config.output_file, renderer.finish())
        .with_context(|| format!("Failed to write {}", config.output_file))?;
    Ok(())
}

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("[ERROR] {}", err);
        let mut causes = err.chain().skip(1).peekable();
        if causes.peek().is_some() {
            eprintln!();
            eprintln!("Caused by:");
            for (i, cause) in causes.enumerate() {
                eprintln!("   {}: {}", i, cause);
            }
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexmap::map::DeckError;
    use hexmap_test::test;

    #[test]
    fn test_generate_map() {
        for radius in [0, 1, 2] {
            let data = generate_map(&GenerateConfig { radius, seed: Some(11) }).unwrap();
            assert_eq!(data.grid.len(), 1 + 3 * (radius * (radius + 1)) as usize);
            assert!(data.paths.is_empty());
        }
    }

    #[test]
    fn test_generate_map_is_reproducible() {
        let config = GenerateConfig { radius: 2, seed: Some(5) };
        let a = generate_map(&config).unwrap().save_to_string().unwrap();
        let b = generate_map(&config).unwrap().save_to_string().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_map_exhausts_deck() {
        let err = generate_map(&GenerateConfig { radius: 3, seed: None }).unwrap_err();
        assert!(matches!(err, MapError::Deck(DeckError::Exhausted)));
    }
}
