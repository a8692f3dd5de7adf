//! The 22 registered rules, in report order.

use bazi_base::{
    Element, ElementRelation, Gender, PillarPosition, TenGod, branches_clash, branches_harm,
    branches_harmonize, branches_punish, na_yin_element,
};

use super::reference::{
    ACCIDENT_BRANCHES, ACCIDENT_STEMS, FEMALE_BEAUTY_PILLARS, MALE_HANDSOME_PILLARS,
    noble_branches, peach_blossom, travel_horse,
};
use super::{ChartView, LifeAspectRule};

pub static RULES: [LifeAspectRule; 22] = [
    LifeAspectRule { name: "容貌", evaluate: appearance },
    LifeAspectRule { name: "体型", evaluate: physique },
    LifeAspectRule { name: "性格", evaluate: personality },
    LifeAspectRule { name: "父母", evaluate: parents },
    LifeAspectRule { name: "兄弟", evaluate: siblings },
    LifeAspectRule { name: "婚姻", evaluate: marriage },
    LifeAspectRule { name: "配偶", evaluate: spouse },
    LifeAspectRule { name: "子女", evaluate: children },
    LifeAspectRule { name: "健康", evaluate: health },
    LifeAspectRule { name: "寿元", evaluate: longevity },
    LifeAspectRule { name: "财运", evaluate: wealth },
    LifeAspectRule { name: "事业", evaluate: career },
    LifeAspectRule { name: "学业", evaluate: study },
    LifeAspectRule { name: "才华", evaluate: talent },
    LifeAspectRule { name: "贵人", evaluate: benefactors },
    LifeAspectRule { name: "意外", evaluate: accidents },
    LifeAspectRule { name: "桃花", evaluate: romance },
    LifeAspectRule { name: "迁移", evaluate: relocation },
    LifeAspectRule { name: "祖业", evaluate: inheritance },
    LifeAspectRule { name: "官非", evaluate: litigation },
    LifeAspectRule { name: "晚运", evaluate: later_life },
    LifeAspectRule { name: "家宅", evaluate: household },
];

const SEPARATOR: &str = "；";

fn judge(hits: Vec<String>, neutral: &str) -> String {
    if hits.is_empty() {
        neutral.to_string()
    } else {
        hits.join(SEPARATOR)
    }
}

fn day_branch_clashes(view: &ChartView, other: PillarPosition) -> bool {
    branches_clash(view.pillars.day.branch(), view.pillars.get(other).branch())
}

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

fn appearance(view: &ChartView) -> String {
    let year = view.pillars.year;
    let mut hits = Vec::new();
    match view.gender {
        Gender::Male => {
            if MALE_HANDSOME_PILLARS.contains(&year) {
                hits.push(format!("年柱{year}在男命俊美列表中，容貌俊美"));
            } else {
                hits.push(format!("年柱{year}不在男命俊美列表中"));
            }
        }
        Gender::Female => {
            if FEMALE_BEAUTY_PILLARS.contains(&year) {
                hits.push(format!("年柱{year}在女命秀丽列表中，容貌秀丽"));
            } else {
                hits.push(format!("年柱{year}不在女命秀丽列表中"));
            }
        }
    }
    if view.ten_gods.hour == TenGod::ShiShen {
        hits.push("时干食神，面相清秀".to_string());
    }
    judge(hits, "无明显容貌特征")
}

fn physique(view: &ChartView) -> String {
    const SHAPES: [(Element, &str); 5] = [
        (Element::Mu, "木多，身材修长"),
        (Element::Huo, "火多，体型偏瘦，精力充沛"),
        (Element::Tu, "土多，体型敦厚"),
        (Element::Jin, "金多，骨骼坚实"),
        (Element::Shui, "水多，体态丰腴"),
    ];
    let hits = SHAPES
        .iter()
        .filter(|(e, _)| view.tally.count(*e) >= 3)
        .map(|(_, text)| text.to_string())
        .collect();
    judge(hits, "五行分布均匀，无明显体型特征")
}

fn personality(view: &ChartView) -> String {
    let dm = view.day_master();
    let base = match dm.element() {
        Element::Mu => "仁慈正直",
        Element::Huo => "热情开朗，性子较急",
        Element::Tu => "稳重守信",
        Element::Jin => "果断刚毅",
        Element::Shui => "聪明灵活",
    };
    let mut hits = vec![format!("日主{dm}{}，{base}", dm.element())];
    match view.ten_gods.month {
        TenGod::QiSha => hits.push("月干七杀，性格刚烈".to_string()),
        TenGod::ShangGuan => hits.push("月干伤官，才高气傲".to_string()),
        TenGod::ZhengYin => hits.push("月干正印，为人宽厚".to_string()),
        _ => {}
    }
    judge(hits, "无明显性格特征")
}

// ---------------------------------------------------------------------------
// Family
// ---------------------------------------------------------------------------

fn parents(view: &ChartView) -> String {
    let mut hits = Vec::new();
    match view.ten_gods.year {
        TenGod::PianCai => hits.push("年干偏财，与父亲缘深".to_string()),
        TenGod::ZhengYin => hits.push("年干正印，母亲慈爱".to_string()),
        _ => {}
    }
    if branches_clash(view.pillars.year.branch(), view.pillars.month.branch()) {
        hits.push("年月相冲，早年与父母聚少离多".to_string());
    }
    judge(hits, "父母缘分平稳，无明显特征")
}

fn siblings(view: &ChartView) -> String {
    let mut hits = Vec::new();
    if view.count_of(&[TenGod::BiJian, TenGod::JieCai]) >= 2 {
        hits.push("比劫重重，兄弟姐妹众多，亦多竞争".to_string());
    }
    if view.ten_gods.month == TenGod::JieCai {
        hits.push("月干劫财，兄弟间易有财务纠纷".to_string());
    }
    judge(hits, "无明显兄弟特征")
}

fn marriage(view: &ChartView) -> String {
    let day = view.pillars.day.branch();
    let mut hits = Vec::new();
    for other in [PillarPosition::Month, PillarPosition::Hour] {
        let b = view.pillars.get(other).branch();
        if branches_clash(day, b) {
            hits.push(format!("日支{day}与{}{b}相冲，婚姻多波折", other.name()));
        }
        if branches_harmonize(day, b) {
            hits.push(format!("日支{day}与{}{b}相合，夫妻和睦", other.name()));
        }
    }
    if view.branches().iter().filter(|&&b| b == day).count() >= 2 && branches_punish(day, day) {
        hits.push(format!("日支{day}自刑，婚姻易生口角"));
    }
    judge(hits, "婚姻平稳，无明显特征")
}

fn spouse(view: &ChartView) -> String {
    let stars: [(TenGod, &str); 2] = match view.gender {
        Gender::Male => [
            (TenGod::ZhengCai, "正财透干，妻贤能干"),
            (TenGod::PianCai, "偏财透干，异性缘佳"),
        ],
        Gender::Female => [
            (TenGod::ZhengGuan, "正官透干，夫星得位"),
            (TenGod::QiSha, "七杀透干，配偶性格强势"),
        ],
    };
    let hits = stars
        .iter()
        .filter(|(god, _)| view.has(*god))
        .map(|(_, text)| text.to_string())
        .collect();
    judge(hits, "配偶星不显，无明显配偶特征")
}

fn children(view: &ChartView) -> String {
    let day = view.day_master().element();
    let hour = view.pillars.hour.stem().element();
    let relation = day.relation_to(hour);
    let text = match (view.gender, relation) {
        (Gender::Male, ElementRelation::ControlledBy) => Some("时干克日干，子女有出息，管教严格"),
        (Gender::Male, ElementRelation::Generates) => Some("日干生时干，为子女操劳"),
        (Gender::Female, ElementRelation::Generates) => Some("日干生时干，子女缘厚"),
        (Gender::Female, ElementRelation::ControlledBy) => Some("时干克日干，子女缘薄，需多费心"),
        _ => None,
    };
    judge(text.into_iter().map(String::from).collect(), "子女缘平常，无明显特征")
}

// ---------------------------------------------------------------------------
// Health and lifespan
// ---------------------------------------------------------------------------

fn health(view: &ChartView) -> String {
    const ORGANS: [(Element, &str); 5] = [
        (Element::Mu, "木旺，注意肝胆"),
        (Element::Huo, "火旺，注意心血管"),
        (Element::Tu, "土旺，注意脾胃"),
        (Element::Jin, "金旺，注意呼吸系统"),
        (Element::Shui, "水旺，注意肾脏与泌尿系统"),
    ];
    let mut hits: Vec<String> = ORGANS
        .iter()
        .filter(|(e, _)| view.tally.count(*e) >= 3)
        .map(|(_, text)| text.to_string())
        .collect();
    for e in view.tally.missing() {
        hits.push(format!("五行缺{e}，相应脏腑需注意"));
    }
    judge(hits, "五行较为平衡，身体无明显隐患")
}

fn longevity(view: &ChartView) -> String {
    let mut hits = Vec::new();
    let year = na_yin_element(view.pillars.year);
    let day = na_yin_element(view.pillars.day);
    if year.generates() == day {
        hits.push("年命纳音生日柱纳音，寿元绵长".to_string());
    }
    if view.has(TenGod::ZhengYin) {
        hits.push("印星护身，福寿双全".to_string());
    }
    if view.has(TenGod::QiSha) && !view.has(TenGod::ZhengYin) && !view.has(TenGod::PianYin) {
        hits.push("七杀无印化，注意意外伤身".to_string());
    }
    judge(hits, "寿元平常，无明显特征")
}

// ---------------------------------------------------------------------------
// Wealth, career, learning
// ---------------------------------------------------------------------------

fn wealth(view: &ChartView) -> String {
    let mut hits = Vec::new();
    let wealth_stars = view.count_of(&[TenGod::ZhengCai, TenGod::PianCai]);
    if wealth_stars > 0 {
        hits.push("财星透干，财运亨通".to_string());
        if view.has(TenGod::JieCai) {
            hits.push("比劫夺财，需防破耗".to_string());
        }
    }
    judge(hits, "财星不显，财运平稳")
}

fn career(view: &ChartView) -> String {
    let mut hits = Vec::new();
    if view.has(TenGod::ZhengGuan) {
        hits.push("正官透干，宜从政或管理".to_string());
    }
    if view.has(TenGod::QiSha) {
        hits.push("七杀透干，宜武职或开创事业".to_string());
    }
    if view.count_of(&[TenGod::ShiShen, TenGod::ShangGuan]) > 0 {
        hits.push("食伤透干，宜技艺或创作".to_string());
    }
    judge(hits, "事业平稳，无明显特征")
}

fn study(view: &ChartView) -> String {
    let mut hits = Vec::new();
    if view.count_of(&[TenGod::ZhengYin, TenGod::PianYin]) > 0 {
        hits.push("印星透干，学业有成".to_string());
    }
    if view.has(TenGod::ShangGuan) {
        hits.push("伤官透干，聪明但易厌学".to_string());
    }
    judge(hits, "学业平常，无明显特征")
}

fn talent(view: &ChartView) -> String {
    let mut hits = Vec::new();
    if view.has(TenGod::ShiShen) {
        hits.push("食神透干，多才多艺".to_string());
    }
    if view.has(TenGod::ShangGuan) {
        hits.push("伤官透干，才华横溢".to_string());
    }
    for pos in view.positions_of(TenGod::PianYin) {
        hits.push(format!("{}偏印，擅长偏门技艺", pos.name()));
    }
    judge(hits, "无明显才华特征")
}

// ---------------------------------------------------------------------------
// Fortune and risk
// ---------------------------------------------------------------------------

fn benefactors(view: &ChartView) -> String {
    let nobles = noble_branches(view.day_master());
    let mut hits = Vec::new();
    for b in view.branches() {
        let text = format!("命带天乙贵人（{b}），一生多得贵人相助");
        if nobles.contains(&b) && !hits.contains(&text) {
            hits.push(text);
        }
    }
    if view.has(TenGod::ZhengYin) {
        hits.push("印星透干，长辈提携".to_string());
    }
    judge(hits, "贵人不显，凡事需靠自身努力")
}

fn accidents(view: &ChartView) -> String {
    let stems: Vec<String> = view
        .stems()
        .iter()
        .filter(|s| ACCIDENT_STEMS.contains(s))
        .map(|s| s.to_string())
        .collect();
    let branches: Vec<String> = view
        .branches()
        .iter()
        .filter(|b| ACCIDENT_BRANCHES.contains(b))
        .map(|b| b.to_string())
        .collect();
    let mut hits = Vec::new();
    if !stems.is_empty() && !branches.is_empty() {
        hits.push(format!(
            "天干见{}，地支见{}，需防意外伤害",
            stems.concat(),
            branches.concat()
        ));
    }
    if view.branch_pairs().any(|(_, a, _, b)| branches_clash(a, b)) {
        hits.push("地支相冲，出行注意安全".to_string());
    }
    judge(hits, "无明显意外特征")
}

fn romance(view: &ChartView) -> String {
    let mut hits = Vec::new();
    for base in [view.pillars.year.branch(), view.pillars.day.branch()] {
        let peach = peach_blossom(base);
        let text = format!("命带桃花（{peach}），异性缘佳");
        if view.branches().contains(&peach) && !hits.contains(&text) {
            hits.push(text);
        }
    }
    judge(hits, "无明显桃花特征")
}

fn relocation(view: &ChartView) -> String {
    let mut hits = Vec::new();
    let horse = travel_horse(view.pillars.day.branch());
    if view.branches().contains(&horse) {
        hits.push(format!("命带驿马（{horse}），一生多迁移奔波"));
    }
    if branches_clash(view.pillars.year.branch(), view.pillars.hour.branch()) {
        hits.push("年时相冲，易离乡发展".to_string());
    }
    judge(hits, "无明显迁移特征")
}

fn inheritance(view: &ChartView) -> String {
    let mut hits = Vec::new();
    let god = view.ten_gods.year;
    if matches!(god, TenGod::ZhengCai | TenGod::PianCai | TenGod::ZhengYin) {
        hits.push(format!("年干{god}，祖上有荫庇"));
    }
    if branches_clash(view.pillars.year.branch(), view.pillars.month.branch()) {
        hits.push("年月相冲，祖业难守".to_string());
    }
    judge(hits, "祖业平常，无明显特征")
}

fn litigation(view: &ChartView) -> String {
    let mut hits = Vec::new();
    if view.has(TenGod::ShangGuan) && view.has(TenGod::ZhengGuan) {
        hits.push("伤官见官，易惹官非口舌".to_string());
    }
    if view.branch_pairs().any(|(_, a, _, b)| branches_punish(a, b)) {
        hits.push("地支相刑，注意是非诉讼".to_string());
    }
    judge(hits, "无明显官非特征")
}

// ---------------------------------------------------------------------------
// Later life and home
// ---------------------------------------------------------------------------

fn later_life(view: &ChartView) -> String {
    let mut hits = Vec::new();
    let god = view.ten_gods.hour;
    match god {
        TenGod::ZhengYin | TenGod::ZhengGuan | TenGod::ZhengCai | TenGod::ShiShen => {
            hits.push(format!("时干{god}，晚年安乐"));
        }
        TenGod::QiSha | TenGod::ShangGuan | TenGod::JieCai => {
            hits.push(format!("时干{god}，晚年需防操劳"));
        }
        _ => {}
    }
    if day_branch_clashes(view, PillarPosition::Hour) {
        hits.push("日时相冲，晚年与子女聚少离多".to_string());
    }
    judge(hits, "晚运平稳，无明显特征")
}

fn household(view: &ChartView) -> String {
    let mut hits = Vec::new();
    let (year, day) = (view.pillars.year.branch(), view.pillars.day.branch());
    if day_branch_clashes(view, PillarPosition::Year) {
        hits.push("年日相冲，居所多变动".to_string());
    }
    if branches_harm(year, day) {
        hits.push("年日相害，宅中易生口角".to_string());
    }
    if view.ten_gods.month == TenGod::ZhengYin {
        hits.push("月干正印，居所安稳".to_string());
    }
    judge(hits, "居所平稳，无明显特征")
}
