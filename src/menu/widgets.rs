use crate::config::Theme;
use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    text::{Line, Span, Text},
    widgets::Widget,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Logo {
    pub(super) theme: Theme,
}

impl Logo {
    const DUEL_WIDTH: u16 = 24;
    const SNAKE_WIDTH: u16 = 28;
    const TEXT_HEIGHT: u16 = 5;
    pub(super) const HEIGHT: u16 = Self::TEXT_HEIGHT + 2;
    pub(super) const WIDTH: u16 = Self::DUEL_WIDTH + Self::SNAKE_WIDTH;

    #[rustfmt::skip]
    const DUEL: [&'static str; Self::TEXT_HEIGHT as usize] = [
         " ____                _  ",
        r"|  _ \  _   _   ___ | | ",
        r"| | | || | | | / _ \| | ",
         "| |_| || |_| ||  __/| | ",
        r"|____/  \__,_| \___||_| ",
    ];

    #[rustfmt::skip]
    const SNAKE: [&'static str; Self::TEXT_HEIGHT as usize] = [
         " ____              _        ",
         "/ ___| _ __   __ _| | _____ ",
        r"\___ \| '_ \ / _` | |/ / _ \",
         " ___) | | | | (_| |   <  __/",
        r"|____/|_| |_|\__,_|_|\_\___|",
    ];
}

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [area] = Layout::horizontal([Self::WIDTH])
            .flex(Flex::Start)
            .areas(area);
        let [words_area, diagram_area] = Layout::vertical([Self::TEXT_HEIGHT, 1])
            .flex(Flex::Start)
            .spacing(1)
            .areas(area);
        let [duel_area, snake_area] = Layout::horizontal([Self::DUEL_WIDTH, Self::SNAKE_WIDTH])
            .flex(Flex::Start)
            .areas(words_area);
        Text::from_iter(Self::DUEL)
            .style(self.theme.player1)
            .render(duel_area, buf);
        Text::from_iter(Self::SNAKE)
            .style(self.theme.player2)
            .render(snake_area, buf);
        Line::from_iter([
            Span::styled("⚬⚬⚬⚬⚬⚬⚬>", self.theme.player1),
            Span::raw("  "),
            Span::styled("●", self.theme.food),
            Span::raw("  "),
            Span::styled("<⚬⚬⚬⚬⚬⚬", self.theme.player2),
        ])
        .centered()
        .render(diagram_area, buf);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Instructions;

impl Instructions {
    pub(super) const HEIGHT: u16 = 3;
    pub(super) const WIDTH: u16 = 24;
}

impl Widget for Instructions {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from_iter([
            Line::from_iter([
                Span::raw("Player 1 steers with "),
                Span::styled("←", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("→", consts::KEY_STYLE),
            ]),
            Line::from_iter([
                Span::raw("Player 2 steers with "),
                Span::styled("a", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("d", consts::KEY_STYLE),
            ]),
            Line::from_iter([
                Span::raw("Ready up with "),
                Span::styled("1", consts::KEY_STYLE),
                Span::raw(" and "),
                Span::styled("2", consts::KEY_STYLE),
                Span::raw("!"),
            ]),
        ]);
        debug_assert_eq!(
            text.height(),
            usize::from(Self::HEIGHT),
            "Instructions::HEIGHT is wrong"
        );
        debug_assert_eq!(
            text.width(),
            usize::from(Self::WIDTH),
            "Instructions::WIDTH is wrong"
        );
        text.render(area, buf);
    }
}
