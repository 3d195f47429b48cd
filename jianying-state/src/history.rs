#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Era {
    pub period: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const TIMELINE: &[Era] = &[
    Era {
        period: "清 · 乾隆年间",
        title: "灯影入川",
        text: "皮影戏随移民入川，在南部县马王一带落地生根，形成以川北灯调为腔的地方流派。",
    },
    Era {
        period: "清末 · 民国",
        title: "戏班遍乡",
        text: "农闲、庙会、婚寿都要请影戏班，一副挑子一盏灯，走村串户，唱的是三国、封神。",
    },
    Era {
        period: "二十世纪后期",
        title: "灯火渐稀",
        text: "娱乐方式骤变，艺人改行，影箱封存，会刻会唱的老艺人越来越少。",
    },
    Era {
        period: "当代",
        title: "非遗新生",
        text: "马王皮影列入国家级非物质文化遗产名录，传承人开班授艺，老影人重新走上亮子。",
    },
];

#[cfg(test)]
mod tests {
    use super::TIMELINE;

    #[test]
    fn timeline_is_filled() {
        assert_eq!(TIMELINE.len(), 4);
        for era in TIMELINE {
            assert!(!era.period.is_empty());
            assert!(!era.title.is_empty());
            assert!(!era.text.is_empty());
        }
    }
}
