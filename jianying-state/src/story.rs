#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoryPage {
    pub chapter: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub glyph: &'static str,
}

pub const STORY_PAGES: &[StoryPage] = &[
    StoryPage {
        chapter: "第一章",
        title: "灯亮了",
        text: "乾隆年间，南部县的戏班在庙会上支起白布，一盏油灯点亮，牛皮刻成的人影便活了过来。",
        glyph: "灯",
    },
    StoryPage {
        chapter: "第二章",
        title: "刀与皮",
        text: "匠人把牛皮刮薄、晾干，用几十把刻刀一刀一刀推出纹样，一个头茬要刻上好几天。",
        glyph: "刻",
    },
    StoryPage {
        chapter: "第三章",
        title: "三根竿",
        text: "艺人一手操两竿，一口唱川北灯调，锣鼓一响，千军万马都在一方亮子里。",
        glyph: "唱",
    },
    StoryPage {
        chapter: "第四章",
        title: "影渐暗",
        text: "电影和电视进了村，看皮影的人越来越少，箱子里的影人也蒙上了灰。",
        glyph: "暗",
    },
    StoryPage {
        chapter: "第五章",
        title: "再相见",
        text: "如今传承人把老影人重新挂上亮子，孩子们围在幕布前，第一次看见了会动的影子。",
        glyph: "见",
    },
];

/// Position inside a picture book. The page never leaves `0..len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoryBook {
    page: usize,
    len: usize,
}

impl Default for StoryBook {
    fn default() -> Self {
        Self::new(STORY_PAGES.len())
    }
}

impl StoryBook {
    pub fn new(len: usize) -> Self {
        Self { page: 0, len }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn is_last(&self) -> bool {
        self.page + 1 >= self.len
    }

    /// Returns `true` if the page moved.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn prev(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.min(self.len.saturating_sub(1));
    }

    /// Fraction of the book read so far, `0.0` for an empty book.
    pub fn progress(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        (self.page + 1) as f64 / self.len as f64
    }
}

#[cfg(test)]
mod tests {
    use super::{StoryBook, STORY_PAGES};

    #[test]
    fn clamps_at_both_ends() {
        let mut book = StoryBook::new(3);
        assert!(book.is_first());
        assert!(!book.prev());
        assert_eq!(book.page(), 0);

        assert!(book.next());
        assert!(book.next());
        assert!(book.is_last());
        assert!(!book.next());
        assert_eq!(book.page(), 2);

        assert!(book.prev());
        assert_eq!(book.page(), 1);
    }

    #[test]
    fn go_to_clamps() {
        let mut book = StoryBook::new(4);
        book.go_to(2);
        assert_eq!(book.page(), 2);
        book.go_to(99);
        assert_eq!(book.page(), 3);
    }

    #[test]
    fn progress() {
        let mut book = StoryBook::new(4);
        assert_eq!(book.progress(), 0.25);
        book.go_to(3);
        assert_eq!(book.progress(), 1.0);
    }

    #[test]
    fn empty_book() {
        let mut book = StoryBook::new(0);
        assert!(book.is_empty());
        assert!(book.is_first());
        assert!(book.is_last());
        assert!(!book.next());
        book.go_to(5);
        assert_eq!(book.page(), 0);
        assert_eq!(book.progress(), 0.0);
    }

    #[test]
    fn default_book_covers_all_pages() {
        let book = StoryBook::default();
        assert_eq!(book.len(), STORY_PAGES.len());
        assert!(!STORY_PAGES.is_empty());
    }
}
