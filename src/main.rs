use docopt::Docopt;
use log::info;
use mazes3d::{
    generators,
    grids,
    masks::BinaryMask2D,
    mesh::Mesh,
    renderers,
    sphere_mesh::{self, CubeSphereConfig},
    units::{Height, SideLength, Width},
    utils,
    wall_mesh::{self, BoundaryWalls, WallMeshConfig},
};
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
};

const USAGE: &str = "Mazes3d

Usage:
    mazes3d_driver -h | --help
    mazes3d_driver cube [--length=<n>] [--outer-scale=<s>] [--hollow] [--seed=<n>] [--walls-out=<path>] [--sphere-out=<path>]
    mazes3d_driver flat [--width=<w>] [--height=<h>] [--closed] [--mask-file=<path>] [--seed=<n>] [--walls-out=<path>]

Options:
    -h --help              Show this screen.
    --length=<n>           Number of cells along each edge of the cube [default: 8].
    --outer-scale=<s>      Radius the sphere's bevel walls reach out to, the sphere itself has radius 1 [default: 0.9].
    --hollow               Leave out the sphere's shell and keep only the bevel walls.
    --width=<w>            The grid width in a w*h flat grid [default: 20].
    --height=<h>           The grid height in a w*h flat grid [default: 20].
    --closed               Also put walls around the outline of a flat maze.
    --mask-file=<path>     Text file masking out cells of a flat grid, one line per row. 'X' or '#' switches a cell off.
    --seed=<n>             Seed for the maze's random walk. Random if not given.
    --walls-out=<path>     Write the wall mesh to a Wavefront OBJ file.
    --sphere-out=<path>    Write the sphere mesh to a Wavefront OBJ file.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_cube: bool,
    cmd_flat: bool,
    flag_length: usize,
    flag_outer_scale: f64,
    flag_hollow: bool,
    flag_width: usize,
    flag_height: usize,
    flag_closed: bool,
    flag_mask_file: String,
    flag_seed: Option<u64>,
    flag_walls_out: String,
    flag_sphere_out: String,
}

mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            Io(::std::io::Error);
            DocOptFailure(::docopt::Error);
            Maze(::mazes3d::errors::MazeError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;
    let mut rng = utils::seeded_rng(args.flag_seed);

    if args.cmd_cube {
        cube_maze(&args, &mut rng)
    } else if args.cmd_flat {
        flat_maze(&args, &mut rng)
    } else {
        Ok(())
    }
}

fn cube_maze(args: &MazeArgs, rng: &mut XorShiftRng) -> Result<()> {

    let mut maze_grid = grids::cube_grid(SideLength(args.flag_length))
        .ok_or("The cube has too many cells to index.")?;
    let carved = generators::randomise(&mut maze_grid, None, rng)?;
    info!("carved a cube maze of {} cells with {} links", maze_grid.size(), carved);

    let walls = wall_mesh::generate_maze_mesh(&maze_grid, &WallMeshConfig::default())?;
    let sphere_config = CubeSphereConfig {
        outer_scale: args.flag_outer_scale,
        is_hollow: args.flag_hollow,
    };
    let sphere = sphere_mesh::generate_cube_sphere_mesh(&maze_grid, &sphere_config)?;

    print_summary("walls", &walls);
    print_summary("sphere", &sphere);
    save_mesh(&walls, &args.flag_walls_out)?;
    save_mesh(&sphere, &args.flag_sphere_out)?;
    Ok(())
}

fn flat_maze(args: &MazeArgs, rng: &mut XorShiftRng) -> Result<()> {

    let (width, height) = (Width(args.flag_width), Height(args.flag_height));
    let maze_grid = if !args.flag_mask_file.is_empty() {
        let mask = load_binary_mask(&args.flag_mask_file)?;
        grids::masked_rect_grid(width, height, mask)
    } else {
        grids::rect_grid(width, height)
    };
    let mut maze_grid = maze_grid.ok_or("The grid has too many cells to index.")?;

    let carved = generators::randomise(&mut maze_grid, None, rng)?;
    info!("carved a flat maze of {} cells with {} links", maze_grid.size(), carved);

    let boundary_walls = if args.flag_closed {
        BoundaryWalls::Closed
    } else {
        BoundaryWalls::Open
    };
    let walls = wall_mesh::generate_maze_mesh(&maze_grid, &WallMeshConfig { boundary_walls })?;

    print_summary("walls", &walls);
    save_mesh(&walls, &args.flag_walls_out)?;
    Ok(())
}

fn print_summary(name: &str, mesh: &Mesh) {
    println!("{}: {} points, {} triangles, {} quads",
             name,
             mesh.point_count(),
             mesh.triangle_count(),
             mesh.quad_count());
}

fn load_binary_mask(file_path: &str) -> Result<BinaryMask2D> {
    let pattern = fs::read_to_string(file_path)
        .chain_err(|| format!("Failed to read mask file {}", file_path))?;
    Ok(BinaryMask2D::from_text(&pattern))
}

/// Nothing is written when no path was given.
fn save_mesh(mesh: &Mesh, file_path: &str) -> Result<()> {

    if file_path.is_empty() {
        return Ok(());
    }
    let mut writer = BufWriter::new(File::create(file_path)
        .chain_err(|| format!("Failed to create mesh file {}", file_path))?);
    renderers::write_wavefront_obj(mesh, &mut writer)
        .and_then(|_| writer.flush())
        .chain_err(|| format!("Failed to write mesh to file {}", file_path))?;
    info!("saved mesh to {}", file_path);
    Ok(())
}
