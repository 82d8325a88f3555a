use toruslife::camera::Camera;
use toruslife::cell::Cell;
use toruslife::grid::Grid;

#[test]
fn renders_a_blinker_frame() {
    let mut grid = Grid::dead(9);
    for col in [3, 4, 5] {
        grid.set(1, col, Cell::Alive);
    }

    let mut cam = Camera::new(9);
    cam.draw(&grid);

    insta::assert_snapshot!(cam.render(), @r"
    ⠀⠐⠒⠀⠀
    ⠀⠀⠀⠀⠀
    ⠀⠀⠀⠀⠀
    ");
}

#[test]
fn frame_has_one_line_per_four_cell_rows() {
    let grid = Grid::dead(10);

    let mut cam = Camera::new(10);
    cam.draw(&grid);

    let frame = cam.render();

    // 10 rows of cells pack into ceil(10 / 4) = 3 lines of ceil(10 / 2) = 5
    // characters
    assert_eq!(frame.lines().count(), 3);
    assert!(frame.lines().all(|line| line.chars().count() == 5));
    assert!(frame.ends_with('\n'));
}

#[test]
fn drawing_overwrites_the_previous_frame() {
    let mut cam = Camera::new(9);

    let mut grid = Grid::dead(9);
    grid.set(0, 0, Cell::Alive);

    cam.draw(&grid);
    cam.render();

    grid.set(0, 0, Cell::Dead);
    cam.draw(&grid);

    let blank: String = cam.render().chars().filter(|&c| c != '\n').collect();
    assert!(blank.chars().all(|c| c == '\u{2800}'));
}
