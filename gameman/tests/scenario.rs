use std::collections::VecDeque;

use gameman::entities::player::PLAYER_SPRITE_PATHS;
use gameman::error::{LoadError, SpriteError};
use gameman::sprites::ImageLoader;
use gameman::video::{DisplayController, Framebuffers, colors};
use gameman::{
    Buttons, Clock, DrawableObject, GameConfig, GameContext, GameError, GameState, InputSource,
    RenderStyle,
};

const FRAME_MS: u32 = 16;

/// Board stand-in. Every gamepad sample is one frame and moves the clock on.
struct FakeBoard {
    script: VecDeque<Buttons>,
    held: Buttons,
    now: u32,
    front: Vec<u16>,
    scanouts: usize,
    reloads: usize,
    missing_sprites: bool,
    loads: Vec<String>,
}

impl FakeBoard {
    fn new() -> Self {
        Self {
            script: VecDeque::new(),
            held: Buttons::NONE,
            now: 0,
            front: Vec::new(),
            scanouts: 0,
            reloads: 0,
            missing_sprites: false,
            loads: Vec::new(),
        }
    }
}

impl InputSource for FakeBoard {
    fn sample(&mut self) -> Buttons {
        self.now += FRAME_MS;
        self.script.pop_front().unwrap_or(self.held)
    }
}

impl Clock for FakeBoard {
    fn now_ms(&self) -> u32 {
        self.now
    }
}

impl DisplayController for FakeBoard {
    fn set_scanout(&mut self, front: &[u16]) {
        self.front = front.to_vec();
        self.scanouts += 1;
    }

    fn reload_at_vblank(&mut self) {
        self.reloads += 1;
    }
}

impl ImageLoader for FakeBoard {
    fn load_image(&mut self, path: &str, dest: &mut [u8]) -> Result<usize, LoadError> {
        if self.missing_sprites {
            return Err(LoadError::FileOpen);
        }
        self.loads.push(path.to_string());
        let color = colors::RED + self.loads.len() as u16;
        for px in dest.chunks_exact_mut(2) {
            px.copy_from_slice(&color.to_ne_bytes());
        }
        Ok(dest.len())
    }
}

fn with_game(style: RenderStyle, test: impl FnOnce(&mut GameContext, &mut FakeBoard)) {
    let config = GameConfig {
        render_style: style,
        ..GameConfig::default()
    };
    let mut a = vec![0u16; config.framebuffer_size()];
    let mut b = vec![0u16; config.framebuffer_size()];
    let mut sprite_memory = vec![0u16; 16 * 1024];
    let framebuffers = Framebuffers::new(&mut a, &mut b, config.width, config.height).unwrap();
    let mut game = GameContext::new(config, framebuffers, &mut sprite_memory).unwrap();
    let mut board = FakeBoard::new();

    game.boot(&mut board);
    test(&mut game, &mut board);
}

fn frames(game: &mut GameContext, board: &mut FakeBoard, held: Buttons, count: usize) {
    board.held = held;
    for _ in 0..count {
        game.frame(board).unwrap();
    }
}

/// Hold `button` for one frame, then let go for `rest` frames.
fn tap(game: &mut GameContext, board: &mut FakeBoard, button: Buttons, rest: usize) {
    frames(game, board, button, 1);
    frames(game, board, Buttons::NONE, rest);
}

/// From the welcome screen to the menu, then long enough for the menu to take input.
fn open_menu(game: &mut GameContext, board: &mut FakeBoard) {
    tap(game, board, Buttons::A, 40);
    assert!(matches!(game.state(), GameState::Menu { .. }));
}

#[test]
fn boot_shows_welcome_on_both_buffers() {
    with_game(RenderStyle::Cpu, |game, board| {
        assert_eq!(game.state(), GameState::Init);
        assert_eq!((board.scanouts, board.reloads), (1, 1));
        assert!(board.front.contains(&colors::WHITE));

        // the first sample is taken and ignored
        assert_eq!(board.now, FRAME_MS);
        assert!(game.queue().is_empty());

        frames(game, board, Buttons::NONE, 3);
        assert_eq!(game.state(), GameState::Init);
        assert!(board.front.contains(&colors::WHITE));
    });
}

#[test]
fn confirm_walks_from_init_to_character_test() {
    with_game(RenderStyle::Cpu, |game, board| {
        frames(game, board, Buttons::A, 1);

        let GameState::Menu { menu } = game.state() else {
            panic!("expected the menu, got {}", game.state());
        };
        assert_eq!(game.queue().len(), 1);
        let front = game.queue().peek().unwrap();
        assert_eq!((front.item, front.priority), (menu, 255));
        assert!(matches!(game.object(menu), Some(DrawableObject::Menu(_))));

        // both buffers were wiped after the frame was drawn, so the welcome text is gone
        assert!(board.front.iter().all(|&px| px == colors::BLACK));

        // still holding the confirm that opened the menu must not pick anything
        frames(game, board, Buttons::A, 40);
        assert!(matches!(game.state(), GameState::Menu { .. }));

        frames(game, board, Buttons::NONE, 1);
        frames(game, board, Buttons::A, 1);

        let GameState::CharacterTest { backdrop, player } = game.state() else {
            panic!("expected the character test, got {}", game.state());
        };
        assert!(game.object(menu).is_none(), "menu must be destroyed");
        let queued: Vec<_> = game.queue().iter().map(|e| (e.item, e.priority)).collect();
        assert_eq!(queued, vec![(backdrop, 255), (player, 128)]);
        assert_eq!(board.loads, PLAYER_SPRITE_PATHS);
    });
}

#[test]
fn menu_waits_out_the_dwell_time() {
    with_game(RenderStyle::Cpu, |game, board| {
        tap(game, board, Buttons::A, 10);
        // 176ms in: the menu accepts the press, the state machine does not yet
        tap(game, board, Buttons::A, 0);
        assert!(matches!(game.state(), GameState::Menu { .. }));

        frames(game, board, Buttons::NONE, 25);
        assert!(matches!(game.state(), GameState::CharacterTest { .. }));
    });
}

#[test]
fn player_walks_and_start_returns_to_menu() {
    with_game(RenderStyle::Cpu, |game, board| {
        open_menu(game, board);
        tap(game, board, Buttons::A, 0);
        let GameState::CharacterTest { player, .. } = game.state() else {
            panic!("expected the character test, got {}", game.state());
        };
        let start = game.object(player).and_then(DrawableObject::as_player).unwrap().position();

        frames(game, board, Buttons::RIGHT, 10);
        let p = game.object(player).and_then(DrawableObject::as_player).unwrap();
        assert_eq!(p.position(), (start.0 + 20, start.1));
        assert!(p.is_moving());

        // stepping right, the last frame of the sheet, drawn over the grass
        assert!(board.front.contains(&colors::GRASS));
        assert!(board.front.contains(&(colors::RED + 8)));

        tap(game, board, Buttons::START, 0);
        let GameState::Menu { menu } = game.state() else {
            panic!("expected the menu, got {}", game.state());
        };
        assert!(game.object(player).is_none());
        assert_eq!(game.queue().len(), 1);
        assert_eq!(game.queue().peek().map(|e| e.item), Some(menu));
        assert_eq!(game.sprites().used(), 0);
        assert_eq!(game.objects().len(), 1);
    });
}

#[test]
fn scrolling_test_from_the_second_option() {
    with_game(RenderStyle::Cpu, |game, board| {
        open_menu(game, board);
        tap(game, board, Buttons::DOWN, 10);
        tap(game, board, Buttons::A, 0);

        let GameState::ScrollingTest { scroller } = game.state() else {
            panic!("expected the scrolling test, got {}", game.state());
        };
        assert_eq!(game.queue().peek().map(|e| (e.item, e.priority)), Some((scroller, 255)));
        assert!(board.loads.is_empty());

        frames(game, board, Buttons::UP | Buttons::LEFT, 2);
        assert!(board.front.contains(&colors::DARK_GREEN));
        assert!(board.front.contains(&colors::GRASS));
    });
}

#[test]
fn sprite_test_outlines_the_selection() {
    with_game(RenderStyle::Dma2d, |game, board| {
        open_menu(game, board);
        tap(game, board, Buttons::DOWN, 10);
        tap(game, board, Buttons::DOWN, 10);
        tap(game, board, Buttons::A, 0);
        assert!(matches!(game.state(), GameState::SpriteTest { .. }));

        tap(game, board, Buttons::RIGHT, 1);
        assert!(board.front.contains(&colors::YELLOW));
        for i in 1..=8u16 {
            assert!(board.front.contains(&(colors::RED + i)), "frame {i} missing");
        }
    });
}

#[test]
fn render_styles_draw_identical_frames() {
    let mut screens = Vec::new();
    for style in [RenderStyle::Cpu, RenderStyle::Dma2d] {
        with_game(style, |game, board| {
            open_menu(game, board);
            let mut shots = vec![board.front.clone()];
            tap(game, board, Buttons::A, 0);
            frames(game, board, Buttons::LEFT, 5);
            shots.push(board.front.clone());
            screens.push(shots);
        });
    }
    assert!(screens[0] == screens[1]);
}

#[test]
fn missing_sprites_halt_the_game() {
    with_game(RenderStyle::Cpu, |game, board| {
        board.missing_sprites = true;
        board.script.push_back(Buttons::A);
        board.script.extend(std::iter::repeat_n(Buttons::NONE, 40));
        board.script.push_back(Buttons::A);

        let err = game.run(board);
        assert_eq!(
            err,
            GameError::Sprite(SpriteError::Load {
                path: PLAYER_SPRITE_PATHS[0],
                error: LoadError::FileOpen,
            })
        );
        assert_eq!(err.code(), 7);
        assert_eq!(game.sprites().used(), 0);
    });
}
