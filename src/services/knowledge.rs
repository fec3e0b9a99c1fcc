//! Bundled legal knowledge base: CN and UK statutes plus leading cases.
//!
//! Entries are process-wide static data compiled into the binary.
//! `KnowledgeBase` is a thin facade over the four section tables; lookups
//! fail with `MissingKnowledgeEntry` so insight generation is fail-fast
//! rather than silently uncited.

use crate::cli::{Jurisdiction, KbSection};
use crate::domain::models::{CaseQuote, KbListing, KbSectionKeys, KnowledgeEntry, SearchHit};
use crate::error::FairsplitError;

pub struct KnowledgeBase {
    cn_statutes: &'static [KnowledgeEntry],
    cn_cases: &'static [KnowledgeEntry],
    uk_statutes: &'static [KnowledgeEntry],
    uk_cases: &'static [KnowledgeEntry],
}

impl KnowledgeBase {
    pub fn bundled() -> Self {
        KnowledgeBase {
            cn_statutes: CN_STATUTES,
            cn_cases: CN_CASES,
            uk_statutes: UK_STATUTES,
            uk_cases: UK_CASES,
        }
    }

    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        KnowledgeBase {
            cn_statutes: &[],
            cn_cases: &[],
            uk_statutes: &[],
            uk_cases: &[],
        }
    }

    pub fn section(&self, jurisdiction: Jurisdiction, section: KbSection) -> &'static [KnowledgeEntry] {
        match (jurisdiction, section) {
            (Jurisdiction::Cn, KbSection::Statutes) => self.cn_statutes,
            (Jurisdiction::Cn, KbSection::Cases) => self.cn_cases,
            (Jurisdiction::Uk, KbSection::Statutes) => self.uk_statutes,
            (Jurisdiction::Uk, KbSection::Cases) => self.uk_cases,
        }
    }

    pub fn entry(
        &self,
        jurisdiction: Jurisdiction,
        section: KbSection,
        key: &str,
    ) -> Result<&'static KnowledgeEntry, FairsplitError> {
        self.section(jurisdiction, section)
            .iter()
            .find(|e| e.key == key)
            .ok_or_else(|| FairsplitError::MissingKnowledgeEntry {
                jurisdiction: jurisdiction.code(),
                section: section.label(),
                key: key.to_string(),
            })
    }

    pub fn statute(
        &self,
        jurisdiction: Jurisdiction,
        key: &str,
    ) -> Result<&'static KnowledgeEntry, FairsplitError> {
        self.entry(jurisdiction, KbSection::Statutes, key)
    }

    pub fn case(
        &self,
        jurisdiction: Jurisdiction,
        key: &str,
    ) -> Result<&'static KnowledgeEntry, FairsplitError> {
        self.entry(jurisdiction, KbSection::Cases, key)
    }

    /// Case-insensitive exact tag membership, never substring matching.
    /// Hit order follows the fixed section order, so results are stable.
    pub fn search_by_tag(&self, tag: &str) -> Vec<SearchHit> {
        let mut hits = Vec::new();
        for (jurisdiction, section, entries) in self.sections() {
            for entry in entries {
                if entry.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                    hits.push(SearchHit {
                        jurisdiction,
                        section,
                        entry,
                    });
                }
            }
        }
        hits
    }

    pub fn listing(&self) -> KbListing {
        let sections = self
            .sections()
            .into_iter()
            .map(|(jurisdiction, section, entries)| KbSectionKeys {
                jurisdiction,
                section,
                keys: entries.iter().map(|e| e.key).collect(),
            })
            .collect::<Vec<_>>();
        KbListing {
            total_entries: sections.iter().map(|s| s.keys.len()).sum(),
            sections,
        }
    }

    fn sections(&self) -> [(Jurisdiction, KbSection, &'static [KnowledgeEntry]); 4] {
        [
            (Jurisdiction::Cn, KbSection::Statutes, self.cn_statutes),
            (Jurisdiction::Cn, KbSection::Cases, self.cn_cases),
            (Jurisdiction::Uk, KbSection::Statutes, self.uk_statutes),
            (Jurisdiction::Uk, KbSection::Cases, self.uk_cases),
        ]
    }
}

static CN_STATUTES: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        key: "Art_1062",
        title: "Joint Property (夫妻共同财产)",
        text: "Property acquired during the marriage belongs to both spouses jointly, \
               including wages and bonuses, income from production, business and \
               investments, income from intellectual property rights, and inherited or \
               gifted property unless Art 1063(3) applies. Both spouses have equal \
               rights to dispose of joint property.",
        source: "Civil Code Book V, Art 1062",
        tags: &["Community Property", "Equal Rights"],
        quote: None,
    },
    KnowledgeEntry {
        key: "Art_1063",
        title: "Separate Property (个人财产)",
        text: "One spouse's separate property comprises pre-marital property, \
               compensation for personal injury, property designated to one spouse by \
               will or gift, personal daily necessities, and other property that should \
               belong to one party.",
        source: "Civil Code Book V, Art 1063",
        tags: &["Separate Property", "Pre-marital Assets"],
        quote: None,
    },
    KnowledgeEntry {
        key: "Art_1065",
        title: "Marital Property Agreement (约定财产制)",
        text: "Spouses may agree in writing that property acquired during marriage and \
               pre-marital property is owned separately, jointly, or partly each. Absent \
               an agreement, or where it is unclear, Arts 1062 and 1063 apply.",
        source: "Civil Code Book V, Art 1065",
        tags: &["Property Agreement", "Written Form"],
        quote: None,
    },
    KnowledgeEntry {
        key: "Art_1087",
        title: "Division of Joint Property on Divorce (离婚财产分割)",
        text: "Upon divorce, joint property is divided by agreement between the parties. \
               Failing agreement, the court judges on the specific circumstances of the \
               property, applying the principle of protecting the interests of children, \
               the wife and the innocent party (照顾子女、女方和无过错方权益的原则).",
        source: "Civil Code Book V, Art 1087",
        tags: &[
            "Property Division",
            "Children's Welfare",
            "Wife Protection",
            "Innocent Party",
        ],
        quote: None,
    },
    KnowledgeEntry {
        key: "Art_1088",
        title: "Housework Compensation (家务劳动补偿)",
        text: "Where one spouse has undertaken greater obligations in raising children, \
               caring for the elderly or assisting the other spouse's work, that spouse \
               may request compensation upon divorce; failing agreement, the court \
               decides. In practice awards are typically symbolic, often ¥10,000-50,000, \
               far below the economic value of the labour contributed.",
        source: "Civil Code Book V, Art 1088",
        tags: &[
            "Housework Compensation",
            "Non-economic Contribution",
            "Gender Inequality",
        ],
        quote: None,
    },
    KnowledgeEntry {
        key: "Art_1090",
        title: "Financial Assistance for Hardship (经济帮助)",
        text: "Upon divorce, if one party has difficulty in living, the other party who \
               has the ability shall provide appropriate assistance, by agreement or \
               court decision.",
        source: "Civil Code Book V, Art 1090",
        tags: &["Financial Assistance", "Hardship"],
        quote: None,
    },
    KnowledgeEntry {
        key: "Art_1091",
        title: "Fault-Based Damage Claims (过错损害赔偿)",
        text: "The innocent party may claim damages where divorce results from bigamy, \
               cohabitation with another person, domestic violence, maltreatment or \
               abandonment of family members, or other serious faults.",
        source: "Civil Code Book V, Art 1091",
        tags: &[
            "Fault",
            "Damage Claims",
            "Domestic Violence",
            "Bigamy",
            "Cohabitation",
        ],
        quote: None,
    },
    KnowledgeEntry {
        key: "Art_1092",
        title: "Penalty for Asset Concealment (隐匿财产处罚)",
        text: "A spouse who conceals, transfers, sells, destroys or squanders joint \
               property, or fabricates joint debts, may be awarded a reduced share or \
               no share of the joint property. The other party may sue for re-division \
               after divorce upon discovering such conduct.",
        source: "Civil Code Book V, Art 1092",
        tags: &["Asset Concealment", "Penalty", "Post-divorce Remedy"],
        quote: None,
    },
    KnowledgeEntry {
        key: "Art_1084",
        title: "Child Custody After Divorce (离婚后子女抚养)",
        text: "Children under two are in principle raised by the mother. For children of \
               two and above, if the parents cannot agree the court decides on the best \
               interests of the child. Children of eight and above have their own wishes \
               respected.",
        source: "Civil Code Book V, Art 1084",
        tags: &["Child Custody", "Best Interests"],
        quote: None,
    },
    KnowledgeEntry {
        key: "Art_1085",
        title: "Child Support (子女抚养费)",
        text: "The non-custodial parent bears part or all of the child support costs. \
               Amount and duration are agreed by the parties or decided by the court.",
        source: "Civil Code Book V, Art 1085",
        tags: &["Child Support"],
        quote: None,
    },
];

static CN_CASES: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        key: "Guiding_Case_66",
        title: "Lei v Song (Guiding Case No 66)",
        text: "Where a spouse conceals, transfers or dissipates joint property before or \
               during divorce proceedings, the court may award a reduced or zero share \
               of the joint property to the offending party under Art 1092. Lei moved \
               ¥195,000 of joint savings to a relative's account before filing and was \
               ordered to pay Song ¥120,000 under the reduced-share principle.",
        source: "Beijing No. 3 Intermediate People's Court, 2015",
        tags: &["Asset Concealment", "Fault", "Reduced Share", "Guiding Case"],
        quote: None,
    },
    KnowledgeEntry {
        key: "Fang_v_Yan",
        title: "Fang v Yan (jurisdictional ruling)",
        text: "Post-divorce property disputes involving Chinese citizens residing abroad \
               are heard by the court at the location of the principal property in \
               China, as it is best positioned to investigate ownership history and \
               transaction records.",
        source: "Supreme People's Court, 2022",
        tags: &["Jurisdiction", "Overseas Chinese", "Property Location Rule"],
        quote: None,
    },
    KnowledgeEntry {
        key: "Yang_v_Yang",
        title: "Yang Yi v Yang Jia (re-trial)",
        text: "A home purchased during marriage with proceeds from the sale of \
               pre-marital property requires tracing: the pre-marital contribution and \
               its natural appreciation remain separate property, while joint mortgage \
               payments and the corresponding appreciation are divided as joint \
               property.",
        source: "Yunnan Provincial High People's Court, 2016",
        tags: &[
            "Pre-marital Property Tracing",
            "Natural Appreciation",
            "Joint vs Separate Property",
        ],
        quote: None,
    },
    KnowledgeEntry {
        key: "Liang_v_Wen",
        title: "Liang Moling v Wen Moxiong",
        text: "Once the marriage is dissolved, disputes solely about property division \
               count as ordinary property disputes, so an agreed jurisdiction clause in \
               the divorce agreement is valid where the chosen court has an actual \
               connection to the dispute.",
        source: "Guangdong Meizhou Intermediate People's Court, 2024",
        tags: &[
            "Jurisdiction",
            "Agreed Jurisdiction",
            "Divorce Agreement Enforcement",
        ],
        quote: None,
    },
    KnowledgeEntry {
        key: "Tu_v_Feng",
        title: "Tu Mocui v Feng Mowei (HK judgment recognition)",
        text: "Hong Kong matrimonial judgments covering property division and child \
               custody are recognised and enforced in mainland China under the SPC-HK \
               mutual recognition arrangement, provided no statutory grounds for \
               refusal exist.",
        source: "Chongqing No. 5 Intermediate People's Court, 2024",
        tags: &[
            "Cross-border",
            "HK Judgment Recognition",
            "Enforcement",
            "Property Division",
        ],
        quote: None,
    },
    KnowledgeEntry {
        key: "Xie_v_He",
        title: "Xie Momei v He Moyang",
        text: "In domestic violence divorces the court may issue a prior judgment \
               (先行判决) dissolving the marriage and settling custody immediately, \
               deferring property division and damage claims to later proceedings. \
               Lump-sum child support is appropriate where the obligor's future \
               compliance is doubtful.",
        source: "Chengdu Wuhou District People's Court, 2024",
        tags: &[
            "Domestic Violence",
            "Prior Judgment",
            "Child Custody",
            "Lump-sum Support",
            "Criminal Prosecution",
        ],
        quote: None,
    },
];

static UK_STATUTES: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        key: "MCA_Sec25",
        title: "Matrimonial Causes Act 1973, Section 25",
        text: "The court must have regard to all circumstances of the case, with first \
               consideration given to the welfare of any minor child of the family, and \
               in particular to: the resources and earning capacity of each party; \
               financial needs and obligations; the standard of living before breakdown; \
               age and duration of the marriage; disability; contributions, including \
               looking after the home or caring for the family; conduct where \
               inequitable to disregard; and lost benefits such as pension rights.",
        source: "MCA 1973, s.25(1)-(2)",
        tags: &[
            "Eight Factors",
            "Financial Provision",
            "Child Welfare First Consideration",
        ],
        quote: None,
    },
    KnowledgeEntry {
        key: "MCA_Sec25A",
        title: "MCA 1973, Section 25A: Clean Break Principle",
        text: "The court must consider whether financial obligations between the parties \
               can be terminated as soon as just and reasonable after divorce, and \
               whether periodical payments should be limited to a term sufficient for \
               the payee to adjust to financial independence without undue hardship.",
        source: "MCA 1973, s.25A(1)-(2)",
        tags: &["Clean Break", "Financial Independence"],
        quote: None,
    },
    KnowledgeEntry {
        key: "MCA_Sec23_24",
        title: "MCA 1973, Sections 23-24: Financial and Property Orders",
        text: "Section 23 empowers the court to order periodical payments, secured \
               periodical payments and lump sums to either party or for the benefit of \
               children. Section 24 covers property transfers, settlements, variation \
               of nuptial settlements and sale of property (s.24A).",
        source: "MCA 1973, ss.23-24A",
        tags: &[
            "Financial Orders",
            "Property Adjustment",
            "Lump Sum",
            "Periodical Payments",
        ],
        quote: None,
    },
    KnowledgeEntry {
        key: "Children_Act_1989",
        title: "Children Act 1989: Welfare Principle",
        text: "The child's welfare is the court's paramount consideration, assessed \
               against the statutory welfare checklist: the child's wishes and feelings, \
               physical, emotional and educational needs, likely effect of change, age \
               and background, any harm suffered or at risk, capability of each parent, \
               and the range of powers available.",
        source: "Children Act 1989, s.1",
        tags: &[
            "Paramount Consideration",
            "Welfare Checklist",
            "Child's Best Interests",
        ],
        quote: None,
    },
];

static UK_CASES: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        key: "White_v_White",
        title: "White v White [2000] UKHL 54",
        text: "Rejected the 'reasonable requirements' ceiling on awards and established \
               the yardstick of equality: where resources exceed needs, equality should \
               be departed from only for good reason. Non-financial contributions such \
               as homemaking and childcare are valued equally to financial \
               contributions.",
        source: "House of Lords, 2000",
        tags: &[
            "Yardstick of Equality",
            "Non-discrimination",
            "Homemaker Contribution",
            "Long Marriage",
        ],
        quote: Some(CaseQuote {
            text: "There should be no bias in favour of the money-earner and against \
                   the home-maker and the child-carer.",
            attribution: "Lord Nicholls",
        }),
    },
    KnowledgeEntry {
        key: "Miller_v_Miller",
        title: "Miller v Miller; McFarlane v McFarlane [2006] UKHL 24",
        text: "Articulated the three strands of fairness: needs, compensation and \
               sharing. Matrimonial property is shared even after a short marriage, \
               while non-matrimonial property may be ring-fenced. In McFarlane, \
               periodical payments of £250,000 per year were awarded as compensation \
               for a foregone career, not as maintenance.",
        source: "House of Lords, 2006",
        tags: &[
            "Three Strands",
            "Needs",
            "Compensation",
            "Sharing",
            "Short Marriage",
            "Matrimonial vs Non-matrimonial Property",
        ],
        quote: Some(CaseQuote {
            text: "Each party to a marriage is entitled to a fair share of the available \
                   property. The search is always for what are the requirements of \
                   fairness in the particular case.",
            attribution: "Lord Nicholls",
        }),
    },
    KnowledgeEntry {
        key: "Radmacher",
        title: "Radmacher v Granatino [2010] UKSC 42",
        text: "Pre-nuptial agreements carry decisive weight when freely entered into \
               with a full appreciation of their implications, unless holding the \
               parties to the agreement would be unfair. The court keeps its s.25 \
               discretion, and the needs of children cannot be contracted out of.",
        source: "UK Supreme Court, 2010",
        tags: &[
            "Pre-nuptial Agreement",
            "Autonomy",
            "Decisive Weight",
            "Fairness Override",
        ],
        quote: Some(CaseQuote {
            text: "The court should give effect to a nuptial agreement that is freely \
                   entered into by each party with a full appreciation of its \
                   implications unless in the circumstances prevailing it would not be \
                   fair to hold the parties to their agreement.",
            attribution: "Lord Phillips, for the majority",
        }),
    },
    KnowledgeEntry {
        key: "Stack_v_Dowden",
        title: "Stack v Dowden [2007] UKHL 17",
        text: "For property held in joint names without an express declaration of \
               trust, beneficial ownership is presumed to follow legal ownership. The \
               party asserting unequal shares bears the burden, assessed on the whole \
               course of dealing between the parties; on the facts a 65/35 split \
               displaced equality.",
        source: "House of Lords, 2007",
        tags: &[
            "Cohabitation",
            "Joint Ownership",
            "Beneficial Interest",
            "Constructive Trust",
            "Whole Course of Dealing",
        ],
        quote: Some(CaseQuote {
            text: "The burden will therefore be on the person seeking to show that the \
                   parties did intend their beneficial interests to be different from \
                   their legal interests.",
            attribution: "Baroness Hale",
        }),
    },
];
